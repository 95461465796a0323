use crate::error::StrassenError;
use crate::extraction::{PageContent, PdfExtractor};
use std::io::Write;
use std::process::Command;
use tracing::warn;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -layout` so that the column layout of the street name
/// directory survives into the extracted text.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, StrassenError> {
        // Write PDF bytes to a temp file; pdftotext wants a path
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| StrassenError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| StrassenError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    StrassenError::PdftotextNotFound
                } else {
                    StrassenError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(StrassenError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);

        // pdftotext uses form feed \x0c as page separator. Pages that
        // yield no text are skipped, not fatal.
        let mut pages = Vec::new();
        for (i, page_text) in text.split('\x0c').enumerate() {
            let lines: Vec<String> = page_text.lines().map(|l| l.to_string()).collect();
            if lines.iter().all(|l| l.trim().is_empty()) {
                warn!(page = i + 1, "no text extracted from page, skipping");
                continue;
            }
            pages.push(PageContent {
                page_number: i + 1,
                lines,
            });
        }

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}
