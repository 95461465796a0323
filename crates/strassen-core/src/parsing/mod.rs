pub mod fixes;
pub mod header;
pub mod person;
pub mod previous;

use crate::error::StrassenError;
use crate::extraction::PageContent;
use crate::model::{StreetDirectory, StreetRecord};
use std::collections::BTreeMap;
use tracing::warn;

/// Strings that are part of the general page header, not street entries.
const DOCUMENT_HEADERS: [&str; 2] = ["Liegenschaftsamt", "Straßennamen in Karlsruhe"];

/// Parse extracted page content into a street directory.
///
/// The source document renders one entry per street: a header line with
/// the name and optional naming year, previous names directly below it,
/// then free-form info text. Without font information in the extracted
/// text, the three parts are told apart by line shape (see
/// `is_entry_header` and `looks_like_previous`). Blocks that match no
/// pattern are collected in `skipped_blocks`, never fatal.
pub fn parse_pages(pages: &[PageContent]) -> Result<StreetDirectory, StrassenError> {
    let all_lines: Vec<&str> = pages
        .iter()
        .flat_map(|p| p.lines.iter().map(|s| s.as_str()))
        .collect();

    if all_lines.is_empty() {
        return Err(StrassenError::ParseError(
            "no text content found in PDF".into(),
        ));
    }

    let mut records = BTreeMap::new();
    let mut skipped_blocks = Vec::new();
    let mut current: Option<EntryBuilder> = None;

    for line in &all_lines {
        let line = collapse_ws(line);
        if line.is_empty() || is_document_header(&line) || is_section_letter(&line) {
            continue;
        }

        if is_entry_header(&line) {
            flush(current.take(), &mut records, &mut skipped_blocks);
            current = Some(EntryBuilder::new(line));
        } else if let Some(entry) = current.as_mut() {
            // Previous-name lines only appear between the header and the
            // first info line.
            if entry.info.is_empty() && previous::looks_like_previous(&line) {
                append(&mut entry.previous_text, &line);
            } else {
                append(&mut entry.info, &line);
            }
        } else {
            skipped_blocks.push(line);
        }
    }
    flush(current.take(), &mut records, &mut skipped_blocks);

    if records.is_empty() {
        return Err(StrassenError::ParseError(
            "no street entries found in document".into(),
        ));
    }

    Ok(StreetDirectory {
        records,
        skipped_blocks,
    })
}

struct EntryBuilder {
    header: String,
    previous_text: String,
    info: String,
}

impl EntryBuilder {
    fn new(header: String) -> Self {
        EntryBuilder {
            header,
            previous_text: String::new(),
            info: String::new(),
        }
    }
}

fn flush(
    entry: Option<EntryBuilder>,
    records: &mut BTreeMap<String, StreetRecord>,
    skipped_blocks: &mut Vec<String>,
) {
    let Some(entry) = entry else {
        return;
    };

    match header::parse_entry_header(&entry.header) {
        Some((name, year)) => {
            let info = entry.info;
            let record = StreetRecord {
                person: person::extract_person(&info),
                previous: previous::parse_previous(&entry.previous_text),
                name: name.clone(),
                year,
                info,
                topic: None,
            };
            records.insert(name, record);
        }
        None => {
            warn!(header = %entry.header, "entry header did not parse, skipping");
            skipped_blocks.push(entry.header);
        }
    }
}

/// Entry headers are short name lines without sentence punctuation,
/// optionally ending in the naming year.
fn is_entry_header(line: &str) -> bool {
    if line.chars().count() > 60 {
        return false;
    }
    let Some(first) = line.chars().next() else {
        return false;
    };
    if !first.is_uppercase() {
        return false;
    }
    if line.contains(['.', ',', ':', '(', ')', '„', '“']) {
        return false;
    }
    header::parse_entry_header(line).is_some_and(|(name, _)| name.chars().count() > 1)
}

fn is_document_header(line: &str) -> bool {
    DOCUMENT_HEADERS.contains(&line)
}

/// Single capital letters mark the alphabetical sections of the document.
fn is_section_letter(line: &str) -> bool {
    let mut chars = line.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}

fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn append(target: &mut String, line: &str) {
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(line);
}
