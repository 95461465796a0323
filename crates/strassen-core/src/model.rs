use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A former name of a street, with the year of the renaming where known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousName {
    pub year: Option<u16>,
    pub name: String,
}

impl PreviousName {
    pub fn new(year: Option<u16>, name: &str) -> Self {
        PreviousName {
            year,
            name: name.to_string(),
        }
    }
}

/// The person a street is named after, as far as the info text reveals it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death: Option<u16>,
}

impl Person {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.birth.is_none() && self.death.is_none()
    }
}

/// One street's history entry as parsed from the city PDF.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreetRecord {
    pub name: String,
    pub year: Option<u16>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub previous: Vec<PreviousName>,
    pub info: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl StreetRecord {
    /// A record with no year, no previous names and no info text carries
    /// nothing the visualization could show.
    pub fn has_information(&self) -> bool {
        self.year.is_some() || !self.previous.is_empty() || !self.info.is_empty()
    }
}

/// Complete parse result: records keyed by street name, plus diagnostics
/// about blocks that did not match any expected pattern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreetDirectory {
    pub records: BTreeMap<String, StreetRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_blocks: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_information() {
        let mut record = StreetRecord {
            name: "Ahaweg".to_string(),
            ..StreetRecord::default()
        };
        assert!(!record.has_information());

        record.year = Some(1906);
        assert!(record.has_information());

        record.year = None;
        record.info = "Der Ahaweg führt am Gewässer Aha entlang".to_string();
        assert!(record.has_information());
    }

    #[test]
    fn test_person_is_empty() {
        assert!(Person::default().is_empty());
        let person = Person {
            birth: Some(1797),
            ..Person::default()
        };
        assert!(!person.is_empty());
    }
}
