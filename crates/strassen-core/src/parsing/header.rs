use regex::Regex;
use std::sync::LazyLock;

/// Street name plus optional four-digit naming year. The year group is
/// optional because many entries never state when the name was assigned.
static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^\d,]+)\D*(\d{4})?").unwrap());

static HYPHEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*-\s*").unwrap());

/// Parse an entry header into the street name and naming year.
///
/// Handles the quirks of the source document: whitespace around hyphens
/// ("Karl - Friedrich - Straße"), the occasional "Strasse" spelling, and
/// trailing lowercase prose ("Unterer Lichtenbergweg in den 1970").
pub fn parse_entry_header(s: &str) -> Option<(String, Option<u16>)> {
    let caps = HEADER_RE.captures(s.trim())?;

    let mut name = caps.get(1)?.as_str().trim().to_string();
    let year = caps.get(2).and_then(|m| m.as_str().parse::<u16>().ok());

    name = HYPHEN_RE.replace_all(&name, "-").to_string();
    name = trim_trailing_lowercase(&name);
    name = name.replace("Strasse", "Straße");

    if name.is_empty() {
        return None;
    }
    Some((name, year))
}

/// Drop trailing all-lowercase words. Extra prose behind the street name
/// is always lowercase while the name itself is capitalized.
fn trim_trailing_lowercase(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    if words.len() < 2 {
        return words.join(" ");
    }
    let mut keep = words.len();
    while keep > 1 && is_all_lowercase(words[keep - 1]) {
        keep -= 1;
    }
    words[..keep].join(" ")
}

fn is_all_lowercase(word: &str) -> bool {
    let mut has_alpha = false;
    for c in word.chars() {
        if c.is_alphabetic() {
            has_alpha = true;
            if !c.is_lowercase() {
                return false;
            }
        }
    }
    has_alpha
}
