use geo::{BooleanOps, MultiPolygon, Simplify, Validation};

/// What happened to one geometry during simplification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimplifyOutcome {
    /// The simplified shape was valid as is.
    Valid,
    /// The simplified shape self-intersected and was rebuilt.
    Repaired,
    /// The rebuilt shape still fails validation; it is kept anyway.
    StillInvalid,
}

/// Douglas–Peucker simplification with `tolerance` in coordinate units
/// (degrees for lon/lat data), followed by a repair pass on invalid output.
///
/// Plain Douglas–Peucker does not preserve topology; the repair pass is what
/// keeps the output usable when a dropped vertex makes rings cross.
pub fn simplify_multipolygon(mp: &MultiPolygon<f64>, tolerance: f64) -> (MultiPolygon<f64>, SimplifyOutcome) {
    let simplified = mp.simplify(&tolerance);
    if simplified.is_valid() {
        return (simplified, SimplifyOutcome::Valid);
    }

    let repaired = repair(&simplified);
    let outcome = if repaired.is_valid() { SimplifyOutcome::Repaired } else { SimplifyOutcome::StillInvalid };
    (repaired, outcome)
}

/// Zero-width repair: union with nothing, which re-nodes self-intersections
/// and drops collapsed rings.
pub fn repair(mp: &MultiPolygon<f64>) -> MultiPolygon<f64> {
    mp.union(&MultiPolygon::new(Vec::new()))
}

#[cfg(test)]
mod tests {
    use geo::{polygon, Area, CoordsIter};

    use super::*;

    #[test]
    fn drops_collinear_vertices() {
        let mp = MultiPolygon(vec![polygon![
            (x: 0.0, y: 0.0), (x: 1.0, y: 0.0005), (x: 2.0, y: 0.0), (x: 2.0, y: 2.0), (x: 0.0, y: 2.0),
        ]]);
        let (simplified, outcome) = simplify_multipolygon(&mp, 0.001);
        assert_eq!(outcome, SimplifyOutcome::Valid);
        assert_eq!(simplified.0[0].exterior().coords_count(), 5);
        assert!((simplified.unsigned_area() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn zero_tolerance_keeps_shape() {
        let mp = MultiPolygon(vec![polygon![
            (x: 0.0, y: 0.0), (x: 1.0, y: 0.5), (x: 2.0, y: 0.0), (x: 2.0, y: 2.0), (x: 0.0, y: 2.0),
        ]]);
        let (simplified, outcome) = simplify_multipolygon(&mp, 0.0);
        assert_eq!(outcome, SimplifyOutcome::Valid);
        assert_eq!(simplified, mp);
    }

    /// Square whose top edge bulges up over the tip of a triangular hole.
    /// Dropping the bulge vertex leaves the tip outside the exterior.
    fn bulge_over_hole() -> MultiPolygon<f64> {
        MultiPolygon(vec![polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 5.0, y: 10.08), (x: 0.0, y: 10.0)],
            interiors: [[(x: 4.0, y: 9.5), (x: 6.0, y: 9.5), (x: 5.0, y: 10.03)]],
        )])
    }

    #[test]
    fn invalid_output_goes_through_repair() {
        let mp = bulge_over_hole();
        assert!(mp.is_valid());
        assert!(!mp.simplify(&0.1).is_valid());

        let (repaired, outcome) = simplify_multipolygon(&mp, 0.1);
        assert_ne!(outcome, SimplifyOutcome::Valid);
        assert_eq!(outcome == SimplifyOutcome::Repaired, repaired.is_valid());
        assert!(!repaired.0.is_empty());
    }

    #[test]
    fn repair_untangles_bowtie() {
        let bowtie = MultiPolygon(vec![polygon![
            (x: 0.0, y: 0.0), (x: 2.0, y: 2.0), (x: 2.0, y: 0.0), (x: 0.0, y: 2.0),
        ]]);
        assert!(!bowtie.is_valid());
        let repaired = repair(&bowtie);
        assert!((repaired.unsigned_area() - 2.0).abs() < 1e-9);
    }
}
