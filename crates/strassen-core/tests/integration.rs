//! Integration tests for the extract → parse → merge pipeline.
//!
//! Uses a MockExtractor that returns pre-built PageContent without
//! invoking pdftotext, so these tests run without poppler-utils.

use strassen_core::error::StrassenError;
use strassen_core::extract_streets;
use strassen_core::extraction::{PageContent, PdfExtractor};
use strassen_core::geojson::{Feature, FeatureCollection, Geometry};
use strassen_core::merge::merge;
use strassen_core::osm::coordinates::collection_from_reader;

struct MockExtractor {
    pages: Vec<PageContent>,
}

impl PdfExtractor for MockExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageContent>, StrassenError> {
        Ok(self.pages.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

fn page(number: usize, lines: &[&str]) -> PageContent {
    PageContent {
        page_number: number,
        lines: lines.iter().map(|s| s.to_string()).collect(),
    }
}

fn fixture_extractor() -> MockExtractor {
    MockExtractor {
        pages: vec![
            page(
                1,
                &[
                    "Liegenschaftsamt",
                    "Straßennamen in Karlsruhe",
                    "A",
                    "Ahaweg 1906",
                    "Der Ahaweg führt am Gewässer Aha entlang, das beim alten",
                    "Brunnen entspringt.",
                ],
            ),
            page(
                2,
                &[
                    "K",
                    "Kaiserstraße 1878",
                    "Wilhelm I., * 22.3.1797 Berlin, † 9.3.1888 Berlin, Deutscher",
                    "Kaiser.",
                    "Rollerstraße",
                    "1905 Kirchstraße",
                    "Die Straße wurde nach der Familie Roller benannt.",
                ],
            ),
        ],
    }
}

// ---------------------------------------------------------------------------
// Test 1: Records parsed from fixture pages have non-empty names and years
// ---------------------------------------------------------------------------
#[test]
fn parsed_records_have_names_and_years() {
    let directory = extract_streets(&[], &fixture_extractor()).unwrap();

    assert_eq!(directory.records.len(), 3);
    for (name, record) in &directory.records {
        assert!(!name.is_empty());
        assert_eq!(name, &record.name);
        if let Some(year) = record.year {
            assert!((1000..2100).contains(&year));
        }
    }
    assert_eq!(directory.records["Ahaweg"].year, Some(1906));
    assert_eq!(directory.records["Kaiserstraße"].year, Some(1878));
}

// ---------------------------------------------------------------------------
// Test 2: Info text spanning several lines is joined, person data extracted
// ---------------------------------------------------------------------------
#[test]
fn person_data_extracted_from_info() {
    let directory = extract_streets(&[], &fixture_extractor()).unwrap();

    let kaiser = &directory.records["Kaiserstraße"];
    assert!(kaiser.info.contains("Deutscher Kaiser."));

    let person = kaiser.person.as_ref().unwrap();
    assert_eq!(person.name.as_deref(), Some("Wilhelm I."));
    assert_eq!(person.birth, Some(1797));
    assert_eq!(person.death, Some(1888));
}

// ---------------------------------------------------------------------------
// Test 3: Previous names are attached to the preceding entry
// ---------------------------------------------------------------------------
#[test]
fn previous_names_attached() {
    let directory = extract_streets(&[], &fixture_extractor()).unwrap();

    let roller = &directory.records["Rollerstraße"];
    assert_eq!(roller.previous.len(), 1);
    assert_eq!(roller.previous[0].year, Some(1905));
    assert_eq!(roller.previous[0].name, "Kirchstraße");
}

// ---------------------------------------------------------------------------
// Test 4: Coordinate extraction, one way with two nodes
// ---------------------------------------------------------------------------
#[test]
fn testweg_yields_one_line_string() {
    let xml = r#"<?xml version='1.0' encoding='UTF-8'?>
<osm version="0.6" generator="test">
  <node id="1" lat="49.0" lon="8.4" />
  <node id="2" lat="49.01" lon="8.41" />
  <way id="10">
    <nd ref="1" />
    <nd ref="2" />
    <tag k="highway" v="residential" />
    <tag k="name" v="Testweg" />
  </way>
</osm>
"#;
    let collection = collection_from_reader(xml.as_bytes()).unwrap();

    assert_eq!(collection.features.len(), 1);
    let feature = &collection.features[0];
    assert_eq!(feature.id, "Testweg");
    assert_eq!(
        feature.geometry,
        Geometry::LineString {
            coordinates: vec![[8.4, 49.0], [8.41, 49.01]],
        }
    );
}

// ---------------------------------------------------------------------------
// Test 5: Normalized merge joins the spelling variants of the two sources
// ---------------------------------------------------------------------------
#[test]
fn merge_joins_spelling_variants() {
    let directory = extract_streets(&[], &fixture_extractor()).unwrap();
    let coordinates = FeatureCollection::new(vec![Feature::new(
        "Kaiserstrasse".to_string(),
        Geometry::LineString {
            coordinates: vec![[8.4, 49.0], [8.41, 49.01]],
        },
    )]);

    let outcome = merge(&directory, &coordinates);

    let feature = &outcome.collection.features[0];
    let props = feature.properties.as_ref().unwrap();
    assert!(props.info.as_deref().unwrap().contains("Wilhelm I."));
    assert!(feature.geometry.coordinate_count() >= 1);
    // The other two records have no geometry in this fixture.
    assert_eq!(outcome.unmatched_records.len(), 2);
}

// ---------------------------------------------------------------------------
// Test 6: Merger is idempotent, byte-identical output on identical inputs
// ---------------------------------------------------------------------------
#[test]
fn merge_is_byte_identical_across_runs() {
    let directory = extract_streets(&[], &fixture_extractor()).unwrap();
    let coordinates = FeatureCollection::new(vec![
        Feature::new(
            "Kaiserstrasse".to_string(),
            Geometry::LineString {
                coordinates: vec![[8.4, 49.0], [8.41, 49.01]],
            },
        ),
        Feature::new(
            "Ahaweg".to_string(),
            Geometry::LineString {
                coordinates: vec![[8.39, 49.0], [8.4, 49.0]],
            },
        ),
    ]);

    let first = serde_json::to_string(&merge(&directory, &coordinates).collection).unwrap();
    let second = serde_json::to_string(&merge(&directory, &coordinates).collection).unwrap();

    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Test 7: Every merged feature has geometry with at least one coordinate
// ---------------------------------------------------------------------------
#[test]
fn merged_features_have_coordinates() {
    let directory = extract_streets(&[], &fixture_extractor()).unwrap();
    let coordinates = FeatureCollection::new(vec![
        Feature::new(
            "Kaiserstrasse".to_string(),
            Geometry::LineString {
                coordinates: vec![[8.4, 49.0], [8.41, 49.01]],
            },
        ),
        Feature::new(
            "Paulckeplatz".to_string(),
            Geometry::Point {
                coordinates: [8.404, 49.013],
            },
        ),
    ]);

    let outcome = merge(&directory, &coordinates);

    assert!(!outcome.collection.features.is_empty());
    for feature in &outcome.collection.features {
        assert!(feature.geometry.coordinate_count() >= 1);
    }
}

// ---------------------------------------------------------------------------
// Test 8: Empty extraction result is a parse error, not a panic
// ---------------------------------------------------------------------------
#[test]
fn empty_pdf_is_an_error() {
    let extractor = MockExtractor { pages: vec![] };
    let result = extract_streets(&[], &extractor);
    assert!(matches!(result, Err(StrassenError::ParseError(_))));
}
