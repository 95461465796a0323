use std::path::PathBuf;
use strassen_core::datasets;
use strassen_core::error::StrassenError;
use strassen_core::geojson::FeatureCollection;

pub fn run(input: PathBuf, out_dir: PathBuf) -> Result<(), StrassenError> {
    let json = std::fs::read(&input)?;
    let collection: FeatureCollection = serde_json::from_slice(&json)?;

    std::fs::create_dir_all(&out_dir)?;

    let topics = datasets::by_topic(&collection);
    let topics_path = out_dir.join("topics.json");
    std::fs::write(&topics_path, serde_json::to_string(&topics)?)?;
    eprintln!(
        "{} topic groups written to {}",
        topics.len(),
        topics_path.display()
    );

    let decades = datasets::by_decade(&collection);
    let decades_path = out_dir.join("decades.json");
    std::fs::write(&decades_path, serde_json::to_string(&decades)?)?;
    eprintln!(
        "{} decade groups written to {}",
        decades.len(),
        decades_path.display()
    );

    Ok(())
}
