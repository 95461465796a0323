use std::path::PathBuf;
use strassen_core::error::StrassenError;
use strassen_core::osm::coordinates::extract_coordinates;

pub fn run(input: PathBuf, out: PathBuf) -> Result<(), StrassenError> {
    let collection = extract_coordinates(&input)?;

    let json = serde_json::to_string(&collection)?;
    std::fs::write(&out, json)?;

    eprintln!(
        "{} street geometries written to {}",
        collection.features.len(),
        out.display()
    );

    Ok(())
}
