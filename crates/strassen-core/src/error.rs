use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StrassenError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("osmosis not found. See https://wiki.openstreetmap.org/wiki/Osmosis for installation")]
    OsmosisNotFound,

    #[error("osmosis failed with exit code {code}: {stderr}")]
    OsmosisFailed { code: i32, stderr: String },

    #[error("failed to parse street entries: {0}")]
    ParseError(String),

    #[error("download of {url} failed: {reason}")]
    Download { url: String, reason: String },

    #[error("checksum mismatch for {path}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("malformed OSM data: {0}")]
    OsmFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}
