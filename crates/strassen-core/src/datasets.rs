use crate::geojson::{Feature, FeatureCollection};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One selectable layer of the map visualization: a label, a display
/// color and the features belonging to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetGroup {
    pub label: String,
    pub color: String,
    pub features: Vec<Feature>,
}

const TOPIC_GROUPS: &[(&str, &str, &str)] = &[
    ("art", "Kunst", "#e41a1c"),
    ("economy", "Wirtschaft", "#377eb8"),
    ("geography", "Geographie", "#4daf4a"),
    ("humanities", "Geisteswissenschaften", "#984ea3"),
    ("military", "Militär", "#ff7f00"),
    ("nature", "Natur", "#a6cee3"),
    ("nobility", "Adel", "#ffd92f"),
    ("politics", "Politik", "#f781bf"),
    ("religion", "Religion", "#999999"),
    ("science", "Wissenschaft", "#a65628"),
    ("tribe", "Stämme", "#66c2a5"),
];

const DECADE_COLORS: [&str; 6] = [
    "#ffffcc", "#d9f0a3", "#addd8e", "#78c679", "#31a354", "#006837",
];

/// Group merged features by the top level of their topic path.
pub fn by_topic(collection: &FeatureCollection) -> Vec<DatasetGroup> {
    TOPIC_GROUPS
        .iter()
        .map(|(root, label, color)| DatasetGroup {
            label: label.to_string(),
            color: color.to_string(),
            features: collection
                .features
                .iter()
                .filter(|f| topic_root(f) == Some(*root))
                .cloned()
                .collect(),
        })
        .filter(|group| !group.features.is_empty())
        .collect()
}

/// Group merged features by the decade the street got its name.
/// Features without a naming year are left out.
pub fn by_decade(collection: &FeatureCollection) -> Vec<DatasetGroup> {
    let mut decades: BTreeMap<u16, Vec<Feature>> = BTreeMap::new();
    for feature in &collection.features {
        let Some(year) = feature.properties.as_ref().and_then(|p| p.year) else {
            continue;
        };
        decades.entry(year - year % 10).or_default().push(feature.clone());
    }

    decades
        .into_iter()
        .enumerate()
        .map(|(i, (decade, features))| DatasetGroup {
            label: format!("{decade}er"),
            color: DECADE_COLORS[i % DECADE_COLORS.len()].to_string(),
            features,
        })
        .collect()
}

fn topic_root(feature: &Feature) -> Option<&str> {
    feature
        .properties
        .as_ref()
        .and_then(|p| p.topic.as_deref())
        .map(|topic| topic.split('/').next().unwrap_or(topic))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geojson::{Geometry, StreetProperties};

    fn feature(name: &str, topic: Option<&str>, year: Option<u16>) -> Feature {
        let mut f = Feature::new(
            name.to_string(),
            Geometry::LineString {
                coordinates: vec![[8.4, 49.0], [8.41, 49.01]],
            },
        );
        f.properties = Some(StreetProperties {
            year,
            topic: topic.map(|t| t.to_string()),
            ..StreetProperties::default()
        });
        f
    }

    #[test]
    fn test_by_topic_groups_on_topic_root() {
        let collection = FeatureCollection::new(vec![
            feature("Brunnenweg", Some("geography/water"), None),
            feature("Bergstraße", Some("geography/mountain"), None),
            feature("Mozartstraße", Some("art/music"), None),
            feature("Leerweg", None, None),
        ]);

        let groups = by_topic(&collection);

        assert_eq!(groups.len(), 2);
        let geo = groups.iter().find(|g| g.label == "Geographie").unwrap();
        assert_eq!(geo.features.len(), 2);
        let art = groups.iter().find(|g| g.label == "Kunst").unwrap();
        assert_eq!(art.features.len(), 1);
    }

    #[test]
    fn test_by_decade_buckets_years() {
        let collection = FeatureCollection::new(vec![
            feature("A", None, Some(1905)),
            feature("B", None, Some(1906)),
            feature("C", None, Some(1964)),
            feature("D", None, None),
        ]);

        let groups = by_decade(&collection);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "1900er");
        assert_eq!(groups[0].features.len(), 2);
        assert_eq!(groups[1].label, "1960er");
        assert_eq!(groups[1].features.len(), 1);
    }

    #[test]
    fn test_empty_topic_groups_are_dropped() {
        let collection = FeatureCollection::new(vec![feature("Leerweg", None, None)]);
        assert!(by_topic(&collection).is_empty());
    }
}
