use crate::error::StrassenError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Result of a fetch: where the extract lives and whether this run
/// actually downloaded it.
#[derive(Debug)]
pub struct FetchOutcome {
    pub extract: PathBuf,
    pub downloaded: bool,
}

/// Download a regional OSM extract unless the cached copy is current.
///
/// The remote checksum file (`<url>.md5`) is always fetched fresh. When
/// it matches the locally stored checksum and the extract file is still
/// on disk, the cached extract is reused. Otherwise the extract is
/// downloaded and its MD5 digest verified before anything is written.
/// Network failure is fatal; re-running the stage is the recovery path.
pub fn fetch_extract(url: &str, target_dir: &Path) -> Result<FetchOutcome, StrassenError> {
    fs::create_dir_all(target_dir)?;

    let file_name = extract_file_name(url).ok_or_else(|| StrassenError::Download {
        url: url.to_string(),
        reason: "URL has no file name".to_string(),
    })?;
    let extract_path = target_dir.join(file_name);
    let checksum_path = target_dir.join(format!("{file_name}.md5"));

    let checksum_url = format!("{url}.md5");
    let remote_body = http_get(&checksum_url)?;
    let remote_digest = parse_checksum(&String::from_utf8_lossy(&remote_body)).ok_or_else(|| {
        StrassenError::Download {
            url: checksum_url,
            reason: "empty checksum file".to_string(),
        }
    })?;

    let local_digest = fs::read_to_string(&checksum_path)
        .ok()
        .and_then(|s| parse_checksum(&s));
    if is_cached(local_digest.as_deref(), &remote_digest, extract_path.exists()) {
        info!(extract = %extract_path.display(), "checksum unchanged, reusing cached extract");
        return Ok(FetchOutcome {
            extract: extract_path,
            downloaded: false,
        });
    }

    info!(%url, "downloading OSM extract");
    let body = http_get(url)?;
    let actual = format!("{:x}", md5::compute(&body));
    if actual != remote_digest {
        return Err(StrassenError::ChecksumMismatch {
            path: extract_path,
            expected: remote_digest,
            actual,
        });
    }

    fs::write(&extract_path, &body)?;
    fs::write(&checksum_path, format!("{remote_digest}  {file_name}\n"))?;
    info!(extract = %extract_path.display(), bytes = body.len(), "extract downloaded");

    Ok(FetchOutcome {
        extract: extract_path,
        downloaded: true,
    })
}

/// The cached extract is valid when the stored checksum matches the
/// remote one and the file is still on disk.
fn is_cached(local: Option<&str>, remote: &str, extract_exists: bool) -> bool {
    extract_exists && local == Some(remote)
}

/// First whitespace-separated token of an `md5sum`-style checksum file.
fn parse_checksum(contents: &str) -> Option<String> {
    contents
        .split_whitespace()
        .next()
        .map(|s| s.to_lowercase())
}

fn extract_file_name(url: &str) -> Option<&str> {
    url.rsplit('/').next().filter(|s| !s.is_empty())
}

fn http_get(url: &str) -> Result<Vec<u8>, StrassenError> {
    let response = reqwest::blocking::get(url).map_err(|e| StrassenError::Download {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    if !response.status().is_success() {
        return Err(StrassenError::Download {
            url: url.to_string(),
            reason: format!("HTTP {}", response.status()),
        });
    }
    response
        .bytes()
        .map(|b| b.to_vec())
        .map_err(|e| StrassenError::Download {
            url: url.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_checksum_plain_digest() {
        assert_eq!(
            parse_checksum("d41d8cd98f00b204e9800998ecf8427e\n").as_deref(),
            Some("d41d8cd98f00b204e9800998ecf8427e")
        );
    }

    #[test]
    fn test_parse_checksum_md5sum_format() {
        assert_eq!(
            parse_checksum("D41D8CD98F00B204E9800998ECF8427E  karlsruhe-regbez-latest.osm.bz2\n")
                .as_deref(),
            Some("d41d8cd98f00b204e9800998ecf8427e")
        );
    }

    #[test]
    fn test_parse_checksum_empty() {
        assert_eq!(parse_checksum("   \n"), None);
    }

    #[test]
    fn test_is_cached_requires_matching_digest_and_file() {
        assert!(is_cached(Some("abc"), "abc", true));
        assert!(!is_cached(Some("abc"), "abc", false));
        assert!(!is_cached(Some("abc"), "def", true));
        assert!(!is_cached(None, "abc", true));
    }

    #[test]
    fn test_extract_file_name() {
        assert_eq!(
            extract_file_name("https://example.org/osm/karlsruhe-regbez-latest.osm.bz2"),
            Some("karlsruhe-regbez-latest.osm.bz2")
        );
        assert_eq!(extract_file_name("https://example.org/osm/"), None);
    }
}
