use std::path::PathBuf;
use strassen_core::error::StrassenError;
use strassen_core::extraction::pdftotext::PdftotextExtractor;

pub fn run(pdf_file: PathBuf, out: PathBuf) -> Result<(), StrassenError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extractor = PdftotextExtractor::new();
    let directory = strassen_core::extract_streets(&pdf_bytes, &extractor)?;

    let json = serde_json::to_string_pretty(&directory.records)?;
    std::fs::write(&out, json)?;

    eprintln!(
        "Parsed {} street entries, written to {}",
        directory.records.len(),
        out.display()
    );
    if !directory.skipped_blocks.is_empty() {
        eprintln!(
            "  {} block(s) did not match any entry pattern",
            directory.skipped_blocks.len()
        );
    }

    Ok(())
}
