use crate::error::StrassenError;
use std::path::Path;
use std::process::Command;
use tracing::info;

/// Check if osmosis is available on the system.
pub fn is_available() -> bool {
    Command::new("osmosis")
        .arg("-v")
        .output()
        .map(|o| o.status.success() || !o.stderr.is_empty())
        .unwrap_or(false)
}

/// Restrict an OSM extract to named highways inside the bounding polygon.
///
/// Pure pass-through to the external `osmosis` binary with a fixed
/// argument sequence: read the extract, clip to the polygon, keep only
/// ways tagged with both `highway` and `name`, drop relations and any
/// nodes left unreferenced, write plain XML.
pub fn filter_highways(
    extract: &Path,
    polygon: &Path,
    output: &Path,
) -> Result<(), StrassenError> {
    let args = osmosis_args(extract, polygon, output);
    info!(extract = %extract.display(), output = %output.display(), "running osmosis");

    let result = Command::new("osmosis").args(&args).output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StrassenError::OsmosisNotFound
        } else {
            StrassenError::Io(e)
        }
    })?;

    if !result.status.success() {
        let code = result.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&result.stderr).to_string();
        return Err(StrassenError::OsmosisFailed { code, stderr });
    }

    Ok(())
}

/// The fixed osmosis argument sequence. Task order matters: each filter
/// applies to the output of the previous task.
fn osmosis_args(extract: &Path, polygon: &Path, output: &Path) -> Vec<String> {
    let read_task = match extract.extension().and_then(|e| e.to_str()) {
        Some("pbf") => "--read-pbf",
        // osmosis detects bz2/gz compression from the file extension
        _ => "--read-xml",
    };

    vec![
        read_task.to_string(),
        format!("file={}", extract.display()),
        "--bounding-polygon".to_string(),
        format!("file={}", polygon.display()),
        "--tf".to_string(),
        "accept-ways".to_string(),
        "highway=*".to_string(),
        "--tf".to_string(),
        "accept-ways".to_string(),
        "name=*".to_string(),
        "--tf".to_string(),
        "reject-relations".to_string(),
        "--used-node".to_string(),
        "--write-xml".to_string(),
        format!("file={}", output.display()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_args_for_compressed_xml_extract() {
        let args = osmosis_args(
            &PathBuf::from("osm/karlsruhe-regbez-latest.osm.bz2"),
            &PathBuf::from("data/karlsruhe.poly"),
            &PathBuf::from("highways.osm"),
        );

        assert_eq!(args[0], "--read-xml");
        assert_eq!(args[1], "file=osm/karlsruhe-regbez-latest.osm.bz2");
        assert!(args.contains(&"--bounding-polygon".to_string()));
        assert!(args.contains(&"highway=*".to_string()));
        assert!(args.contains(&"name=*".to_string()));
        assert!(args.contains(&"reject-relations".to_string()));
        assert!(args.contains(&"--used-node".to_string()));
        assert_eq!(args.last().unwrap(), "file=highways.osm");
    }

    #[test]
    fn test_args_for_pbf_extract() {
        let args = osmosis_args(
            &PathBuf::from("osm/karlsruhe.osm.pbf"),
            &PathBuf::from("data/karlsruhe.poly"),
            &PathBuf::from("highways.osm"),
        );
        assert_eq!(args[0], "--read-pbf");
    }

    #[test]
    fn test_filters_come_before_writer() {
        let args = osmosis_args(
            &PathBuf::from("a.osm.bz2"),
            &PathBuf::from("b.poly"),
            &PathBuf::from("c.osm"),
        );
        let polygon_pos = args.iter().position(|a| a == "--bounding-polygon").unwrap();
        let used_node_pos = args.iter().position(|a| a == "--used-node").unwrap();
        let writer_pos = args.iter().position(|a| a == "--write-xml").unwrap();
        assert!(polygon_pos < used_node_pos && used_node_pos < writer_pos);
    }
}
