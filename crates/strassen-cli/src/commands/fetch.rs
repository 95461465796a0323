use std::path::PathBuf;
use strassen_core::error::StrassenError;
use strassen_core::osm::fetch::fetch_extract;

pub fn run(url: &str, dir: PathBuf) -> Result<(), StrassenError> {
    let outcome = fetch_extract(url, &dir)?;

    if outcome.downloaded {
        eprintln!("Downloaded {}", outcome.extract.display());
    } else {
        eprintln!("Up to date: {}", outcome.extract.display());
    }

    Ok(())
}
