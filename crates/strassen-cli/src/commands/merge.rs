use std::collections::BTreeMap;
use std::path::PathBuf;
use strassen_core::error::StrassenError;
use strassen_core::geojson::FeatureCollection;
use strassen_core::model::{StreetDirectory, StreetRecord};

pub fn run(records: PathBuf, coordinates: PathBuf, out: PathBuf) -> Result<(), StrassenError> {
    let records_json = std::fs::read(&records)?;
    let records: BTreeMap<String, StreetRecord> = serde_json::from_slice(&records_json)?;
    let directory = StreetDirectory {
        records,
        skipped_blocks: Vec::new(),
    };

    let coordinates_json = std::fs::read(&coordinates)?;
    let collection: FeatureCollection = serde_json::from_slice(&coordinates_json)?;

    let outcome = strassen_core::merge::merge(&directory, &collection);

    let json = serde_json::to_string(&outcome.collection)?;
    std::fs::write(&out, json)?;

    for name in &outcome.without_information {
        eprintln!("No information about \"{name}\"");
    }
    for name in &outcome.unmatched_records {
        eprintln!("Could not find coordinates for \"{name}\"");
    }
    eprintln!(
        "{} features written to {} ({} geometry-only)",
        outcome.collection.features.len(),
        out.display(),
        outcome.unmatched_features.len()
    );

    Ok(())
}
