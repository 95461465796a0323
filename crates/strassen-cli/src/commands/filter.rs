use std::path::PathBuf;
use strassen_core::error::StrassenError;
use strassen_core::osm::filter::filter_highways;

pub fn run(extract: PathBuf, polygon: PathBuf, out: PathBuf) -> Result<(), StrassenError> {
    filter_highways(&extract, &polygon, &out)?;
    eprintln!("Filtered highways written to {}", out.display());
    Ok(())
}
