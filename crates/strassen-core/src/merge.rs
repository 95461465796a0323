use crate::geojson::{Feature, FeatureCollection, StreetProperties};
use crate::model::StreetDirectory;
use std::collections::BTreeMap;
use tracing::info;

/// Merged collection plus the diagnostic lists of everything that did
/// not line up. None of these are fatal; they are reported so the
/// upstream data can be fixed and the stage re-run.
#[derive(Debug)]
pub struct MergeOutcome {
    pub collection: FeatureCollection,
    /// Records carrying no year, previous names or info text.
    pub without_information: Vec<String>,
    /// Records for which no geometry feature was found.
    pub unmatched_records: Vec<String>,
    /// Geometry features for which no record was found.
    pub unmatched_features: Vec<String>,
}

/// Join street records and geometry features on normalized street name.
///
/// Features keep their place in the output even without a matching
/// record; the result is ordered by normalized name, so merging the same
/// inputs twice yields byte-identical output.
pub fn merge(directory: &StreetDirectory, coordinates: &FeatureCollection) -> MergeOutcome {
    let mut features: BTreeMap<String, Feature> = BTreeMap::new();
    for feature in &coordinates.features {
        features.insert(normalize_name(&feature.id), feature.clone());
    }

    let mut without_information = Vec::new();
    let mut unmatched_records = Vec::new();

    for (name, record) in &directory.records {
        if !record.has_information() {
            without_information.push(name.clone());
            continue;
        }
        match features.get_mut(&normalize_name(name)) {
            Some(feature) => {
                feature.properties = Some(StreetProperties {
                    year: record.year,
                    previous: record.previous.clone(),
                    info: (!record.info.is_empty()).then(|| record.info.clone()),
                    person: record.person.clone(),
                    topic: record.topic.clone(),
                });
            }
            None => unmatched_records.push(name.clone()),
        }
    }

    let unmatched_features = features
        .values()
        .filter(|f| f.properties.is_none())
        .map(|f| f.id.clone())
        .collect();

    let collection = FeatureCollection::new(features.into_values().collect());
    info!(
        features = collection.features.len(),
        unmatched_records = unmatched_records.len(),
        "merged street records with geometry"
    );

    MergeOutcome {
        collection,
        without_information,
        unmatched_records,
        unmatched_features,
    }
}

/// Normalize a street name for matching.
///
/// The two data sources spell many street names slightly differently
/// ("Kaiserstraße" vs "Kaiserstrasse", stray hyphens, double spaces).
/// Lowercase, hyphens to spaces, ß to ss, whitespace collapsed.
pub fn normalize_name(name: &str) -> String {
    let lowered = name.to_lowercase().replace('-', " ").replace('ß', "ss");
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}
