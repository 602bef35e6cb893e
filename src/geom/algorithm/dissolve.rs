use std::collections::BTreeMap;

use geo::MultiPolygon;

use crate::geom::Geometries;

/// Union shapes that share a key. Groups come back in key order.
pub fn dissolve<K: Ord>(shapes: impl IntoIterator<Item = (K, MultiPolygon<f64>)>) -> BTreeMap<K, MultiPolygon<f64>> {
    let mut groups: BTreeMap<K, Vec<MultiPolygon<f64>>> = BTreeMap::new();
    for (key, shape) in shapes {
        groups.entry(key).or_default().push(shape);
    }

    groups.into_iter()
        .filter_map(|(key, shapes)| Geometries::new(shapes).union().map(|union| (key, union)))
        .collect()
}

#[cfg(test)]
mod tests {
    use geo::{polygon, Area};

    use super::*;

    fn square(x: f64, y: f64) -> MultiPolygon<f64> {
        MultiPolygon(vec![polygon![(x: x, y: y), (x: x + 1.0, y: y), (x: x + 1.0, y: y + 1.0), (x: x, y: y + 1.0)]])
    }

    #[test]
    fn groups_by_key() {
        let dissolved = dissolve([
            ("Kollam", square(0.0, 0.0)),
            ("Alappuzha", square(5.0, 5.0)),
            ("Kollam", square(1.0, 0.0)),
        ]);
        assert_eq!(dissolved.keys().copied().collect::<Vec<_>>(), vec!["Alappuzha", "Kollam"]);
        assert_eq!(dissolved["Kollam"].0.len(), 1);
        assert!((dissolved["Kollam"].unsigned_area() - 2.0).abs() < 1e-9);
    }
}
