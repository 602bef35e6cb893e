use std::{fs::File, io::BufReader, path::Path};

use anyhow::{anyhow, Context, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::{json, Value};

use crate::common::write_json_file;
use crate::error::PipelineError;
use crate::feature::FeatureCollection;

/// Read a FeatureCollection from a GeoJSON file.
pub(crate) fn read_feature_collection(path: &Path) -> Result<FeatureCollection> {
    let file = File::open(path)
        .with_context(|| format!("[io::geojson] Failed to open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| PipelineError::MalformedGeoJson { path: path.to_path_buf(), reason: e.to_string() }.into())
}

/// Write a FeatureCollection as pretty-printed GeoJSON.
pub(crate) fn write_feature_collection(path: &Path, collection: &FeatureCollection) -> Result<()> {
    write_json_file(path, collection)
}

/// Parse a GeoJSON `Polygon` or `MultiPolygon` geometry into a geo::MultiPolygon.
/// Returns `None` for null geometries and other geometry types.
pub(crate) fn geometry_to_multipolygon(geometry: &Value) -> Result<Option<MultiPolygon<f64>>> {
    let coords = || geometry["coordinates"].as_array()
        .ok_or_else(|| anyhow!("[io::geojson] geometry has no coordinates array"));

    match geometry["type"].as_str() {
        Some("Polygon") => Ok(Some(MultiPolygon(vec![parse_polygon_coords(coords()?)?]))),
        Some("MultiPolygon") => {
            let polygons = coords()?.iter()
                .map(|polygon| polygon.as_array()
                    .ok_or_else(|| anyhow!("[io::geojson] MultiPolygon member is not an array"))
                    .and_then(|rings| parse_polygon_coords(rings)))
                .collect::<Result<Vec<_>>>()?;
            Ok(Some(MultiPolygon(polygons)))
        }
        _ => Ok(None),
    }
}

/// Convert a MultiPolygon to a GeoJSON geometry. A single polygon is written
/// as a `Polygon` when `collapse_single` is set.
pub(crate) fn multipolygon_to_geometry(mp: &MultiPolygon<f64>, collapse_single: bool) -> Value {
    fn ring(ls: &LineString<f64>) -> Vec<[f64; 2]> {
        ls.coords().map(|c| [c.x, c.y]).collect()
    }

    fn polygon(p: &Polygon<f64>) -> Vec<Vec<[f64; 2]>> {
        std::iter::once(p.exterior()).chain(p.interiors()).map(ring).collect()
    }

    if collapse_single && mp.0.len() == 1 {
        json!({ "type": "Polygon", "coordinates": polygon(&mp.0[0]) })
    } else {
        let polygons = mp.0.iter().map(polygon).collect::<Vec<_>>();
        json!({ "type": "MultiPolygon", "coordinates": polygons })
    }
}

/// Parse polygon coordinates: `[exterior, hole, hole, ...]`.
fn parse_polygon_coords(rings: &[Value]) -> Result<Polygon<f64>> {
    let mut rings = rings.iter().map(|ring| ring.as_array()
        .ok_or_else(|| anyhow!("[io::geojson] ring is not an array"))
        .and_then(|ring| parse_ring_coords(ring)));

    let exterior = match rings.next() {
        Some(ring) => ring?,
        None => LineString(Vec::new()),
    };
    let interiors = rings.collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(exterior, interiors))
}

/// Parse a ring (exterior or interior) from GeoJSON coordinates.
/// Format: [[x, y], [x, y], ...]
fn parse_ring_coords(coords: &[Value]) -> Result<LineString<f64>> {
    let points = coords.iter().map(parse_position).collect::<Result<Vec<_>>>()?;
    // geo::Polygon::new closes the ring if needed.
    Ok(LineString(points))
}

/// Parse a single `[x, y, ...]` position.
pub(crate) fn parse_position(position: &Value) -> Result<Coord<f64>> {
    let pair = position.as_array()
        .filter(|pair| pair.len() >= 2)
        .ok_or_else(|| anyhow!("[io::geojson] Invalid position: {position}"))?;
    let x = pair[0].as_f64()
        .ok_or_else(|| anyhow!("[io::geojson] Invalid coordinate: x must be a number"))?;
    let y = pair[1].as_f64()
        .ok_or_else(|| anyhow!("[io::geojson] Invalid coordinate: y must be a number"))?;
    Ok(Coord { x, y })
}
