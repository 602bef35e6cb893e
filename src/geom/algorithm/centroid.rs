use serde_json::Value;

use crate::common::parse_position;

/// Arithmetic mean of the exterior-ring vertices of a GeoJSON geometry.
///
/// Only the first ring is used: the ring of a `Polygon`, or the exterior of
/// the first member of a `MultiPolygon`. Vertices are averaged exactly as
/// listed, closing vertex included, so the result is biased towards densely
/// digitised edges and differs from the area centroid for irregular shapes.
/// Returns `None` for other geometry types, empty rings and malformed positions.
pub fn vertex_mean_centroid(geometry: &Value) -> Option<[f64; 2]> {
    let coords = geometry.get("coordinates")?.as_array()?;
    let ring = match geometry.get("type")?.as_str()? {
        "Polygon" => coords.first()?,
        "MultiPolygon" => coords.first()?.as_array()?.first()?,
        _ => return None,
    };

    let ring = ring.as_array()?;
    if ring.is_empty() {
        return None;
    }

    let (mut sum_x, mut sum_y) = (0.0, 0.0);
    for position in ring {
        let coord = parse_position(position).ok()?;
        sum_x += coord.x;
        sum_y += coord.y;
    }
    let n = ring.len() as f64;
    Some([sum_x / n, sum_y / n])
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn square_centroid() {
        let geometry = json!({ "type": "Polygon", "coordinates": [[[0, 0], [0, 2], [2, 2], [2, 0]]] });
        assert_eq!(vertex_mean_centroid(&geometry), Some([1.0, 1.0]));
    }

    #[test]
    fn closing_vertex_is_counted() {
        let geometry = json!({ "type": "Polygon", "coordinates": [[[0, 0], [0, 2], [2, 2], [2, 0], [0, 0]]] });
        assert_eq!(vertex_mean_centroid(&geometry), Some([0.8, 0.8]));
    }

    #[test]
    fn multipolygon_uses_first_exterior() {
        let geometry = json!({
            "type": "MultiPolygon",
            "coordinates": [
                [[[10, 10], [10, 12], [12, 12], [12, 10]], [[10.5, 10.5], [11, 10.5], [11, 11]]],
                [[[50, 50], [50, 60], [60, 60]]],
            ],
        });
        assert_eq!(vertex_mean_centroid(&geometry), Some([11.0, 11.0]));
    }

    #[test]
    fn unsupported_or_broken_geometry() {
        assert_eq!(vertex_mean_centroid(&Value::Null), None);
        assert_eq!(vertex_mean_centroid(&json!({ "type": "Point", "coordinates": [1, 2] })), None);
        assert_eq!(vertex_mean_centroid(&json!({ "type": "Polygon", "coordinates": [] })), None);
        assert_eq!(vertex_mean_centroid(&json!({ "type": "Polygon", "coordinates": [[]] })), None);
        assert_eq!(vertex_mean_centroid(&json!({ "type": "Polygon", "coordinates": [[[1]]] })), None);
    }
}
