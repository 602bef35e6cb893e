use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::common::{
    file_size_kb, geometry_to_multipolygon, multipolygon_to_geometry, read_feature_collection,
    write_feature_collection,
};
use crate::config::{Layout, DISTRICT_TOLERANCE, LSG_TOLERANCE, METERS_PER_DEGREE};
use crate::feature::FeatureCollection;
use crate::geom::{simplify_multipolygon, Geometries, SimplifyOutcome};

use super::{banner, reduction_pct, thousands};

/// One input file to simplify.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplifyJob {
    pub description: &'static str,
    pub input: PathBuf,
    pub output: PathBuf,
    /// Tolerance in degrees.
    pub tolerance: f64,
}

impl SimplifyJob {
    /// LSG boundaries at ~111 m, then district boundaries at ~555 m.
    pub fn for_layout(layout: &Layout) -> [SimplifyJob; 2] {
        [
            SimplifyJob {
                description: "LSG boundaries",
                input: layout.lsg_with_districts(),
                output: layout.lsg_simplified(),
                tolerance: LSG_TOLERANCE,
            },
            SimplifyJob {
                description: "District boundaries",
                input: layout.districts(),
                output: layout.districts_simplified(),
                tolerance: DISTRICT_TOLERANCE,
            },
        ]
    }

    #[inline]
    fn tolerance_m(&self) -> i64 { (self.tolerance * METERS_PER_DEGREE).round() as i64 }
}

/// Vertex and validity tallies for one simplified collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimplifyCounts {
    /// Exterior-ring vertices before simplification.
    pub original_coords: usize,
    pub simplified_coords: usize,
    /// Geometries that were invalid after simplification and rebuilt.
    pub repaired: usize,
    /// Rebuilt geometries that still fail validation.
    pub still_invalid: usize,
}

#[derive(Debug, Clone)]
pub struct SimplifyReport {
    pub job: SimplifyJob,
    pub features: usize,
    pub original_kb: f64,
    pub simplified_kb: f64,
    pub counts: SimplifyCounts,
}

impl SimplifyReport {
    pub fn size_reduction(&self) -> f64 { reduction_pct(self.original_kb, self.simplified_kb) }

    pub fn coord_reduction(&self) -> f64 {
        reduction_pct(self.counts.original_coords as f64, self.counts.simplified_coords as f64)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SimplifySummary {
    pub reports: Vec<SimplifyReport>,
    /// Jobs whose input did not exist yet.
    pub skipped: Vec<SimplifyJob>,
}

/// Simplify every polygonal geometry in place. Other geometries are left
/// untouched and not counted.
pub fn simplify_collection(collection: &mut FeatureCollection, tolerance: f64) -> Result<SimplifyCounts> {
    let mut counts = SimplifyCounts::default();
    let mut originals = Vec::new();
    let mut simplified = Vec::new();

    for feature in &mut collection.features {
        let Some(shape) = geometry_to_multipolygon(&feature.geometry)
            .context("[simplify_collection] Bad geometry")? else { continue };
        let was_polygon = feature.geometry["type"] == "Polygon";

        let (shape_out, outcome) = simplify_multipolygon(&shape, tolerance);
        match outcome {
            SimplifyOutcome::Valid => {}
            SimplifyOutcome::Repaired => counts.repaired += 1,
            SimplifyOutcome::StillInvalid => {
                counts.repaired += 1;
                counts.still_invalid += 1;
            }
        }

        feature.geometry = multipolygon_to_geometry(&shape_out, was_polygon);
        originals.push(shape);
        simplified.push(shape_out);
    }

    counts.original_coords = Geometries::new(originals).exterior_coords_count();
    counts.simplified_coords = Geometries::new(simplified).exterior_coords_count();
    Ok(counts)
}

fn run_job(job: &SimplifyJob) -> Result<SimplifyReport> {
    info!("[simplify] {}: {} at {} degrees (~{}m)", job.description, job.input.display(), job.tolerance, job.tolerance_m());
    let original_kb = file_size_kb(&job.input)?;

    let mut collection = read_feature_collection(&job.input)?;
    let counts = simplify_collection(&mut collection, job.tolerance)?;
    if counts.repaired > 0 {
        warn!("[simplify] {} invalid geometries after simplification were repaired", counts.repaired);
    }
    if counts.still_invalid > 0 {
        warn!("[simplify] {} geometries are still invalid after repair", counts.still_invalid);
    }

    write_feature_collection(&job.output, &collection)?;
    let simplified_kb = file_size_kb(&job.output)?;

    Ok(SimplifyReport { job: job.clone(), features: collection.len(), original_kb, simplified_kb, counts })
}

/// `simplify`: reduce vertex density of the LSG and district files.
/// Inputs that do not exist yet are skipped, not treated as errors.
pub fn simplify_boundaries(layout: &Layout) -> Result<SimplifySummary> {
    let mut summary = SimplifySummary::default();
    for job in SimplifyJob::for_layout(layout) {
        if !job.input.is_file() {
            warn!("[simplify] skipping {}: {} not found", job.description, job.input.display());
            summary.skipped.push(job);
            continue;
        }
        summary.reports.push(run_job(&job)?);
    }
    Ok(summary)
}

impl fmt::Display for SimplifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let job = &self.job;
        writeln!(f, "Processing: {}", job.input.display())?;
        writeln!(f, "Tolerance: {} degrees (~{}m)", job.tolerance, job.tolerance_m())?;
        writeln!(f, "Features: {}", self.features)?;
        if self.counts.repaired > 0 {
            writeln!(f, "Repaired geometries: {} ({} still invalid)", self.counts.repaired, self.counts.still_invalid)?;
        }
        writeln!(f, "  Original size: {} KB", thousands(self.original_kb, 2))?;
        writeln!(f, "  New size: {} KB", thousands(self.simplified_kb, 2))?;
        writeln!(f, "  Size reduction: {:.1}%", self.size_reduction())?;
        writeln!(f, "  Coordinate points: {} -> {}",
            thousands(self.counts.original_coords as f64, 0), thousands(self.counts.simplified_coords as f64, 0))?;
        write!(f, "  Coordinate reduction: {:.1}%", self.coord_reduction())
    }
}

impl fmt::Display for SimplifySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(f, "GEOJSON SIMPLIFICATION FOR WEB")?;
        for report in &self.reports {
            writeln!(f, "\n{report}")?;
        }
        for job in &self.skipped {
            writeln!(f, "\nSkipping: {} (file not found)", job.description)?;
            writeln!(f, "  Expected: {}", job.input.display())?;
        }

        let total = self.reports.len() + self.skipped.len();
        write!(f, "\nSuccessfully simplified {}/{} files", self.reports.len(), total)?;
        if !self.skipped.is_empty() {
            write!(f, "\nNote: run tag-districts and extract-districts before simplify")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map};

    use super::*;
    use crate::feature::Feature;

    #[test]
    fn drops_vertices_and_keeps_polygon_type() {
        let geometry = json!({
            "type": "Polygon",
            "coordinates": [[[76.0, 10.0], [76.05, 10.0001], [76.1, 10.0], [76.1, 10.1], [76.0, 10.1], [76.0, 10.0]]],
        });
        let mut fc = FeatureCollection::new(vec![
            Feature::new(Map::new(), geometry),
            Feature::new(Map::new(), json!({ "type": "Point", "coordinates": [76.0, 10.0] })),
        ]);

        let counts = simplify_collection(&mut fc, LSG_TOLERANCE).unwrap();
        assert_eq!(counts.original_coords, 6);
        assert_eq!(counts.simplified_coords, 5);
        assert_eq!(counts.repaired, 0);
        assert_eq!(fc.features[0].geometry["type"], "Polygon");
        assert_eq!(fc.features[1].geometry["type"], "Point");
    }

    #[test]
    fn self_intersecting_output_is_repaired_and_counted() {
        // dropping the bulge on the top edge leaves the hole's tip outside
        let geometry = json!({
            "type": "Polygon",
            "coordinates": [
                [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [5.0, 10.08], [0.0, 10.0], [0.0, 0.0]],
                [[4.0, 9.5], [6.0, 9.5], [5.0, 10.03], [4.0, 9.5]],
            ],
        });
        let mut fc = FeatureCollection::new(vec![Feature::new(Map::new(), geometry)]);

        let counts = simplify_collection(&mut fc, 0.1).unwrap();
        assert_eq!(counts.repaired, 1);
        assert!(counts.still_invalid <= 1);
        assert_eq!(counts.original_coords, 6);
        let kind = fc.features[0].geometry["type"].as_str().unwrap();
        assert!(kind == "Polygon" || kind == "MultiPolygon", "{kind}");
    }

    #[test]
    fn missing_inputs_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let summary = simplify_boundaries(&Layout::new(dir.path())).unwrap();
        assert!(summary.reports.is_empty());
        assert_eq!(summary.skipped.len(), 2);
        assert!(summary.to_string().contains("Successfully simplified 0/2 files"));
    }

    #[test]
    fn tolerance_in_metres() {
        let [lsg, districts] = SimplifyJob::for_layout(&Layout::default());
        assert_eq!(lsg.tolerance_m(), 111);
        assert_eq!(districts.tolerance_m(), 555);
    }
}
