use crate::model::Person;
use regex::Regex;
use std::sync::LazyLock;

// Date formats seen in the info texts:
//
//   "* 1122"              "† 19.4.1967"
//   "* um 1480"           "+ 4.6.1875"
//   "geb. 10.11.1810"     "gest. 02.05.1899"
//   "* 3o.9.1859"         "+ Januar 1944"
//                         "gestorben 29.02.1980"
//
// The scan of the source document sometimes renders a zero as the letter
// "o" ("3o.9.1859"), so every digit position also accepts "o".

const MONTHS: &str =
    "(?:Januar|Februar|März|April|Mai|Juni|Juli|August|September|Oktober|November|Dezember)";

const BIRTH_PREFIXES: [&str; 2] = [r"\*", r"geb\."];
const DEATH_PREFIXES: [&str; 5] = [r"†", r"\+", r"gest\.", r"hingerichtet:", r"gestorben"];

fn date_patterns() -> Vec<String> {
    let d = "(?:[0-9]|o)";
    vec![
        // "23.10.1805", "4.9.1965", "24.12. 1930"
        format!(r"(?:am\s+)?{d}{d}?\.\s*{d}{d}?\.\s*({d}{d}{d}{d}?)"),
        // "10. Dezember 1815"
        format!(r"(?:am\s+)?{d}{d}?\.\s*{MONTHS}\s*({d}{d}{d}{d}?)"),
        // "1122", "um 1480"
        format!(r"(?:um)?\s*({d}{d}{d}{d}?)"),
        // "Januar 1944"
        format!(r"{MONTHS}\s*({d}{d}{d}{d}?)"),
    ]
}

fn compile(prefixes: &[&str]) -> Vec<Regex> {
    let mut regexes = Vec::new();
    for pattern in date_patterns() {
        for prefix in prefixes {
            regexes.push(Regex::new(&format!(r"(?i){prefix}\s*{pattern}")).unwrap());
        }
    }
    regexes
}

static BIRTH_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(&BIRTH_PREFIXES));
static DEATH_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(&DEATH_PREFIXES));

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([\w\s\-.]+)").unwrap());

/// Year of the first date matched by any of the given regexes. Patterns
/// are tried in order of specificity, so "geb. 10.11.1810" yields 1810,
/// not 10.
fn extract_year(s: &str, regexes: &[Regex]) -> Option<u16> {
    for re in regexes {
        if let Some(caps) = re.captures(s) {
            let year = caps.get(1)?.as_str().replace('o', "0");
            return year.parse::<u16>().ok();
        }
    }
    None
}

/// Try to extract person data from an entry's info text.
///
/// Returns `None` when the text mentions neither a birth nor a death
/// date, since a bare leading name is no evidence the street is named
/// after a person.
pub fn extract_person(info: &str) -> Option<Person> {
    let birth = extract_year(info, &BIRTH_RES);
    let death = extract_year(info, &DEATH_RES);
    if birth.is_none() && death.is_none() {
        return None;
    }

    let name = NAME_RE.captures(info).and_then(|caps| {
        let mut name = caps.get(1).unwrap().as_str().trim().to_string();
        if name.ends_with(" geb") || name.ends_with(" gen") {
            // "geboren" (birth name) or "genannt" (nick name) follows
            name.truncate(name.len() - 4);
        } else if name.ends_with('.') {
            let chars: Vec<char> = name.chars().collect();
            if chars.len() >= 2 && !matches!(chars[chars.len() - 2], 'I' | 'V' | 'X') {
                // Not a roman numeral like "Wilhelm I."
                name.pop();
            }
        }
        let name = name.trim().to_string();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    });

    Some(Person { name, birth, death })
}
