use geo::{BooleanOps, CoordsIter, MultiPolygon};

/// A collection of boundary MultiPolygons in geographic coordinates.
#[derive(Debug, Clone)]
pub struct Geometries {
    shapes: Vec<MultiPolygon<f64>>,
}

impl Geometries {
    /// Construct a Geometries object from a vector of MultiPolygons
    pub fn new(polygons: Vec<MultiPolygon<f64>>) -> Self {
        Self { shapes: polygons }
    }

    /// Get the number of MultiPolygons.
    #[inline] pub fn len(&self) -> usize { self.shapes.len() }

    /// Check if there are no MultiPolygons.
    #[inline] pub fn is_empty(&self) -> bool { self.shapes.is_empty() }

    /// Get a reference to the list of MultiPolygons.
    #[inline] pub fn shapes(&self) -> &[MultiPolygon<f64>] { &self.shapes }

    /// Compute the union of all MultiPolygons into a single MultiPolygon.
    /// This method may be slow for large numbers of complex polygons.
    #[inline]
    pub fn union(&self) -> Option<MultiPolygon<f64>> {
        self.shapes.iter().cloned().reduce(|a, b| a.union(&b))
    }

    /// Number of exterior-ring vertices across all shapes (closing vertex included).
    pub fn exterior_coords_count(&self) -> usize {
        self.shapes.iter()
            .flat_map(|mp| mp.0.iter())
            .map(|polygon| polygon.exterior().coords_count())
            .sum()
    }
}
