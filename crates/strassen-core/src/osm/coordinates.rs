use crate::error::StrassenError;
use crate::geojson::{Feature, FeatureCollection, Geometry, Position};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::warn;

/// Convert filtered OSM XML into one GeoJSON feature per street name.
///
/// A street consisting of a single way becomes a `LineString`; several
/// disjoint ways become a `MultiLineString`. Closed pedestrian areas
/// (squares) become `Polygon`s and named `highway=place` nodes become
/// `Point`s. Streets with no resolvable coordinates are omitted.
pub fn extract_coordinates(input: &Path) -> Result<FeatureCollection, StrassenError> {
    let file = File::open(input)?;
    collection_from_reader(BufReader::new(file))
}

pub fn collection_from_reader<R: BufRead>(source: R) -> Result<FeatureCollection, StrassenError> {
    let parsed = parse_osm(source)?;
    Ok(build_collection(parsed))
}

#[derive(Debug, Default, Clone)]
struct WayData {
    id: Option<i64>,
    node_refs: Vec<i64>,
    tags: HashMap<String, String>,
}

#[derive(Debug, Default)]
struct NodeData {
    id: Option<i64>,
    coord: Option<Position>,
    tags: HashMap<String, String>,
}

#[derive(Debug, Default)]
struct ParsedOsm {
    nodes: HashMap<i64, Position>,
    ways: Vec<WayData>,
    place_nodes: Vec<(String, Position)>,
}

fn parse_osm<R: BufRead>(source: R) -> Result<ParsedOsm, StrassenError> {
    let mut reader = Reader::from_reader(source);
    reader.trim_text(true);

    let mut parsed = ParsedOsm::default();
    let mut current_node: Option<NodeData> = None;
    let mut current_way: Option<WayData> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Eof => break,
            Event::Start(e) => match e.name().as_ref() {
                b"node" => current_node = node_from_attrs(&e)?,
                b"way" => {
                    current_way = Some(WayData {
                        id: get_attr(&e, b"id")?.and_then(|v| v.parse::<i64>().ok()),
                        ..WayData::default()
                    })
                }
                b"nd" => record_node_ref(&e, current_way.as_mut())?,
                b"tag" => record_tag(&e, current_way.as_mut(), current_node.as_mut())?,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"node" => {
                    if let Some(node) = node_from_attrs(&e)? {
                        finish_node(node, &mut parsed);
                    }
                }
                b"nd" => record_node_ref(&e, current_way.as_mut())?,
                b"tag" => record_tag(&e, current_way.as_mut(), current_node.as_mut())?,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"node" => {
                    if let Some(node) = current_node.take() {
                        finish_node(node, &mut parsed);
                    }
                }
                b"way" => {
                    if let Some(way) = current_way.take() {
                        parsed.ways.push(way);
                    }
                }
                _ => {}
            },
            _ => {}
        }
        buf.clear();
    }

    Ok(parsed)
}

fn node_from_attrs(e: &BytesStart<'_>) -> Result<Option<NodeData>, StrassenError> {
    let id = get_attr(e, b"id")?.and_then(|v| v.parse::<i64>().ok());
    let lat = get_attr(e, b"lat")?.and_then(|v| v.parse::<f64>().ok());
    let lon = get_attr(e, b"lon")?.and_then(|v| v.parse::<f64>().ok());
    match (id, lon, lat) {
        (Some(id), Some(lon), Some(lat)) => Ok(Some(NodeData {
            id: Some(id),
            coord: Some([lon, lat]),
            tags: HashMap::new(),
        })),
        _ => Ok(None),
    }
}

fn record_node_ref(
    e: &BytesStart<'_>,
    current_way: Option<&mut WayData>,
) -> Result<(), StrassenError> {
    if let Some(way) = current_way {
        if let Some(reference) = get_attr(e, b"ref")?.and_then(|v| v.parse::<i64>().ok()) {
            way.node_refs.push(reference);
        }
    }
    Ok(())
}

fn record_tag(
    e: &BytesStart<'_>,
    current_way: Option<&mut WayData>,
    current_node: Option<&mut NodeData>,
) -> Result<(), StrassenError> {
    let key = get_attr(e, b"k")?;
    let value = get_attr(e, b"v")?;
    if let (Some(key), Some(value)) = (key, value) {
        if let Some(way) = current_way {
            way.tags.insert(key, value);
        } else if let Some(node) = current_node {
            node.tags.insert(key, value);
        }
    }
    Ok(())
}

fn finish_node(node: NodeData, parsed: &mut ParsedOsm) {
    let (Some(id), Some(coord)) = (node.id, node.coord) else {
        return;
    };
    parsed.nodes.insert(id, coord);
    if node.tags.get("highway").map(String::as_str) == Some("place") {
        if let Some(name) = node.tags.get("name") {
            if !name.is_empty() {
                parsed.place_nodes.push((name.clone(), coord));
            }
        }
    }
}

fn get_attr(event: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>, StrassenError> {
    for attr in event.attributes().with_checks(false) {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_ref() == key {
            return Ok(Some(attr.unescape_value()?.to_string()));
        }
    }
    Ok(None)
}

struct StreetWay {
    coords: Vec<Position>,
    area: bool,
}

fn build_collection(parsed: ParsedOsm) -> FeatureCollection {
    let mut streets: BTreeMap<String, Vec<StreetWay>> = BTreeMap::new();

    for way in &parsed.ways {
        let Some(name) = way.tags.get("name").filter(|n| !n.is_empty()) else {
            continue;
        };
        if !way.tags.contains_key("highway") {
            continue;
        }

        let Some(coords) = resolve_coords(way, &parsed.nodes) else {
            warn!(
                way = way.id.unwrap_or(-1),
                street = %name,
                "way references missing nodes, dropping"
            );
            continue;
        };
        if coords.len() < 2 {
            continue;
        }

        let closed = way.node_refs.len() >= 2 && way.node_refs.first() == way.node_refs.last();
        // Squares are mapped as closed pedestrian ways with area=yes,
        // see https://wiki.openstreetmap.org/wiki/Key:area
        let area = closed
            && way.tags.get("area").map(String::as_str) == Some("yes")
            && way.tags.get("highway").map(String::as_str) == Some("pedestrian");

        streets
            .entry(name.clone())
            .or_default()
            .push(StreetWay { coords, area });
    }

    let mut features: BTreeMap<String, Geometry> = streets
        .into_iter()
        .map(|(name, ways)| (name, ways_to_geometry(ways)))
        .collect();

    // Named squares represented as bare place nodes; streets win on
    // name collisions.
    for (name, coord) in parsed.place_nodes {
        features
            .entry(name)
            .or_insert(Geometry::Point { coordinates: coord });
    }

    FeatureCollection::new(
        features
            .into_iter()
            .map(|(name, geometry)| Feature::new(name, geometry))
            .collect(),
    )
}

fn resolve_coords(way: &WayData, nodes: &HashMap<i64, Position>) -> Option<Vec<Position>> {
    way.node_refs
        .iter()
        .map(|id| nodes.get(id).copied())
        .collect()
}

fn ways_to_geometry(mut ways: Vec<StreetWay>) -> Geometry {
    if ways.len() == 1 {
        let way = ways.remove(0);
        if way.area {
            Geometry::Polygon {
                coordinates: vec![way.coords],
            }
        } else {
            Geometry::LineString {
                coordinates: way.coords,
            }
        }
    } else {
        Geometry::MultiLineString {
            coordinates: ways.into_iter().map(|w| w.coords).collect(),
        }
    }
}
