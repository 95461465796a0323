pub mod classify;
pub mod datasets;
pub mod error;
pub mod extraction;
pub mod geojson;
pub mod merge;
pub mod model;
pub mod osm;
pub mod parsing;

use error::StrassenError;
use extraction::PdfExtractor;
use model::StreetDirectory;

/// Main API entry point: turn the city's street name PDF into a street
/// directory.
///
/// Extracts the text page by page, segments it into per-street entries,
/// applies the manual fixes for known data errors, and attaches a topic
/// to every record that has info text.
pub fn extract_streets(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<StreetDirectory, StrassenError> {
    let pages = extractor.extract_pages(pdf_bytes)?;

    let mut directory = parsing::parse_pages(&pages)?;
    parsing::fixes::apply_manual_fixes(&mut directory.records);
    classify::attach_topics(&mut directory.records);

    Ok(directory)
}
