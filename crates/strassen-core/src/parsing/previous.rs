use crate::model::PreviousName;
use regex::Regex;
use std::sync::LazyLock;

/// "1905 Kirchstraße", optionally led by "bzw.", "ca." or "um". Three
/// digit years occur for medieval renamings.
static PART_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:bzw\.\s*)?(?:ca\.\s*)?(?:um\s*)?(\d{3,4})\s+(.+)$").unwrap()
});

static YEAR_LEAD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:bzw\.\s*|ca\.\s*|um\s+)?\d{3,4}\s+\S").unwrap());

/// Parse a list of previous street names.
pub fn parse_previous(s: &str) -> Vec<PreviousName> {
    if s.trim().is_empty() {
        return Vec::new();
    }

    let mut entries = Vec::new();
    for part in s.split([',', ';', '/']) {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        match PART_RE.captures(part) {
            Some(caps) => {
                let year = caps.get(1).and_then(|m| m.as_str().parse::<u16>().ok());
                entries.push(PreviousName::new(year, caps.get(2).unwrap().as_str().trim()));
            }
            None => entries.push(PreviousName::new(None, part)),
        }
    }
    entries
}

/// Whether a line looks like a previous-name line rather than info text.
/// Previous names appear directly below the entry header and lead with a
/// year token.
pub fn looks_like_previous(line: &str) -> bool {
    YEAR_LEAD_RE.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(parse_previous("").is_empty());
        assert!(parse_previous("   ").is_empty());
    }

    #[test]
    fn test_single_with_year() {
        let entries = parse_previous("1905 Kirchstraße");
        assert_eq!(entries, vec![PreviousName::new(Some(1905), "Kirchstraße")]);
    }

    #[test]
    fn test_multiple_separated() {
        let entries = parse_previous("1718 Carlsgasse, 1741 Bärengasse; Schlossstraße");
        assert_eq!(
            entries,
            vec![
                PreviousName::new(Some(1718), "Carlsgasse"),
                PreviousName::new(Some(1741), "Bärengasse"),
                PreviousName::new(None, "Schlossstraße"),
            ]
        );
    }

    #[test]
    fn test_prefixes_stripped() {
        let entries = parse_previous("um 1480 Dorfgasse");
        assert_eq!(entries, vec![PreviousName::new(Some(1480), "Dorfgasse")]);

        let entries = parse_previous("ca. 1700 Große Rappengasse");
        assert_eq!(
            entries,
            vec![PreviousName::new(Some(1700), "Große Rappengasse")]
        );
    }

    #[test]
    fn test_three_digit_year() {
        let entries = parse_previous("975 Altgasse");
        assert_eq!(entries, vec![PreviousName::new(Some(975), "Altgasse")]);
    }

    #[test]
    fn test_looks_like_previous() {
        assert!(looks_like_previous("1905 Kirchstraße"));
        assert!(looks_like_previous("um 1480 Dorfgasse"));
        assert!(!looks_like_previous("Die Straße erinnert an den Maler."));
        assert!(!looks_like_previous("1905"));
    }
}
