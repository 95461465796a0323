//! Minimal RFC 7946 GeoJSON types, just enough for the pipeline's
//! street geometries and their merged properties.

use crate::model::{Person, PreviousName};
use serde::{Deserialize, Serialize};

/// A single position as `[longitude, latitude]`.
pub type Position = [f64; 2];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
    LineString { coordinates: Vec<Position> },
    MultiLineString { coordinates: Vec<Vec<Position>> },
    Polygon { coordinates: Vec<Vec<Position>> },
}

impl Geometry {
    /// Total number of coordinate pairs over all parts.
    pub fn coordinate_count(&self) -> usize {
        match self {
            Geometry::Point { .. } => 1,
            Geometry::LineString { coordinates } => coordinates.len(),
            Geometry::MultiLineString { coordinates } | Geometry::Polygon { coordinates } => {
                coordinates.iter().map(|part| part.len()).sum()
            }
        }
    }
}

/// Street history attached to a merged feature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreetProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub previous: Vec<PreviousName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureKind {
    #[default]
    Feature,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: FeatureKind,
    pub id: String,
    pub geometry: Geometry,
    pub properties: Option<StreetProperties>,
}

impl Feature {
    pub fn new(id: String, geometry: Geometry) -> Self {
        Feature {
            kind: FeatureKind::Feature,
            id,
            geometry,
            properties: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureCollectionKind {
    #[default]
    FeatureCollection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: FeatureCollectionKind,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        FeatureCollection {
            kind: FeatureCollectionKind::FeatureCollection,
            features,
        }
    }
}
