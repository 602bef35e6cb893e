use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{json, Map};
use tracing::{debug, info, warn};

use crate::common::{
    geometry_to_multipolygon, multipolygon_to_geometry, read_feature_collection, require_file_exists,
    write_feature_collection,
};
use crate::config::{Layout, UNKNOWN_DISTRICT};
use crate::error::PipelineError;
use crate::feature::{Feature, FeatureCollection};
use crate::geom::{dissolve, Geometries};

use super::{banner, thousands};

/// One dissolved district boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct DistrictArea {
    pub name: String,
    /// LSG features merged into the district.
    pub lsg_count: usize,
    pub area_sq_km: f64,
}

#[derive(Debug, Clone)]
pub struct DistrictsSummary {
    pub output: PathBuf,
    pub input_features: usize,
    /// Features tagged `Unknown` and left out of the dissolve.
    pub excluded_unknown: usize,
    /// Districts sorted by name.
    pub districts: Vec<DistrictArea>,
}

impl DistrictsSummary {
    pub fn total_area(&self) -> f64 {
        self.districts.iter().map(|d| d.area_sq_km).sum()
    }
}

/// Dissolve district-tagged LSG features into one feature per district with
/// `district`, `name` and `area_sq_km` properties, sorted by name.
///
/// Every feature must carry `district`; `source` only names the file in the
/// error. Features tagged `Unknown` are excluded.
pub fn dissolve_districts(collection: &FeatureCollection, source: &Path) -> Result<(FeatureCollection, Vec<DistrictArea>)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    let mut shapes = Vec::with_capacity(collection.len());

    for feature in &collection.features {
        let district = feature.property_str("district")
            .ok_or_else(|| PipelineError::MissingDistrictField { path: source.to_path_buf() })?;
        if district == UNKNOWN_DISTRICT { continue }

        *counts.entry(district).or_default() += 1;
        match geometry_to_multipolygon(&feature.geometry)
            .with_context(|| format!("[dissolve_districts] Bad geometry in {}", source.display()))?
        {
            Some(shape) => shapes.push((district, shape)),
            None => debug!("[dissolve_districts] feature in {district} has no polygon geometry"),
        }
    }

    for (i, (district, count)) in counts.iter().enumerate() {
        info!("[dissolve_districts] {}. {}: {} LSGs", i + 1, district, count);
    }

    let dissolved = dissolve(shapes);
    let (names, shapes): (Vec<&str>, Vec<_>) = dissolved.into_iter().unzip();
    let geometries = Geometries::new(shapes);
    let areas = geometries.areas_sq_km()?;

    let mut features = Vec::with_capacity(names.len());
    let mut districts = Vec::with_capacity(names.len());
    for ((name, shape), area_sq_km) in names.iter().zip(geometries.shapes()).zip(areas) {
        let mut properties = Map::new();
        properties.insert("district".to_string(), json!(name));
        properties.insert("name".to_string(), json!(name));
        properties.insert("area_sq_km".to_string(), json!(area_sq_km));
        features.push(Feature::new(properties, multipolygon_to_geometry(shape, true)));

        districts.push(DistrictArea {
            name: name.to_string(),
            lsg_count: counts.get(name).copied().unwrap_or_default(),
            area_sq_km,
        });
    }

    let mut output = FeatureCollection::new(features);
    if let Some(crs) = collection.foreign.get("crs") {
        output.foreign.insert("crs".to_string(), crs.clone());
    }
    Ok((output, districts))
}

/// `extract-districts`: dissolve tagged LSGs into district boundaries.
pub fn extract_districts(layout: &Layout) -> Result<DistrictsSummary> {
    let input = layout.lsg_with_districts();
    require_file_exists(&input, "lsgmap tag-districts first")?;

    info!("[extract_districts] reading {}", input.display());
    let collection = read_feature_collection(&input)?;
    info!("[extract_districts] loaded {} LSG features", collection.len());

    let excluded_unknown = collection.features.iter()
        .filter(|f| f.property_str("district") == Some(UNKNOWN_DISTRICT))
        .count();
    if excluded_unknown > 0 {
        warn!("[extract_districts] {excluded_unknown} features have district='Unknown' and will be excluded");
    }

    let (districts_fc, districts) = dissolve_districts(&collection, &input)?;

    let output = layout.districts();
    info!("[extract_districts] writing {} districts to {}", districts.len(), output.display());
    write_feature_collection(&output, &districts_fc)?;

    Ok(DistrictsSummary { output, input_features: collection.len(), excluded_unknown, districts })
}

impl fmt::Display for DistrictsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(f, "DISTRICT BOUNDARIES EXTRACTED")?;
        writeln!(f, "Total districts: {}", self.districts.len())?;
        if self.excluded_unknown > 0 {
            writeln!(f, "Excluded (district 'Unknown'): {} of {} LSGs", self.excluded_unknown, self.input_features)?;
        }

        writeln!(f, "\nDistricts with areas:")?;
        for district in &self.districts {
            writeln!(f, "  {:25} {:>10} sq km  ({} LSGs)", district.name, thousands(district.area_sq_km, 2), district.lsg_count)?;
        }

        writeln!(f, "\nTotal area: {} sq km", thousands(self.total_area(), 2))?;
        writeln!(f, "(Kerala actual area: ~38,852 sq km)")?;
        write!(f, "\nDistrict boundaries saved to: {}", self.output.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(district: Option<&str>, x: f64) -> Feature {
        let mut properties = Map::new();
        if let Some(district) = district {
            properties.insert("district".to_string(), json!(district));
        }
        let geometry = json!({
            "type": "Polygon",
            "coordinates": [[[x, 10.0], [x + 0.1, 10.0], [x + 0.1, 10.1], [x, 10.1], [x, 10.0]]],
        });
        Feature::new(properties, geometry)
    }

    #[test]
    fn missing_district_is_an_error() {
        let fc = FeatureCollection::new(vec![tagged(Some("Kollam"), 76.0), tagged(None, 76.1)]);
        let err = dissolve_districts(&fc, Path::new("in.geojson")).unwrap_err();
        assert!(matches!(err.downcast_ref::<PipelineError>(), Some(PipelineError::MissingDistrictField { .. })));
    }

    #[test]
    fn sorted_by_name_without_unknown() {
        let fc = FeatureCollection::new(vec![
            tagged(Some("Kollam"), 76.5),
            tagged(Some("Alappuzha"), 76.2),
            tagged(Some(UNKNOWN_DISTRICT), 77.0),
            tagged(Some("Kollam"), 76.6),
        ]);
        let (out, districts) = dissolve_districts(&fc, Path::new("in.geojson")).unwrap();

        let names: Vec<&str> = districts.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Alappuzha", "Kollam"]);
        assert_eq!(districts[1].lsg_count, 2);
        assert!((districts[1].area_sq_km - 2.0 * districts[0].area_sq_km).abs() < 0.5);

        assert_eq!(out.features[1].property_str("name"), Some("Kollam"));
        assert_eq!(out.features[1].property_str("district"), Some("Kollam"));
        assert_eq!(out.features[0].geometry["type"], "Polygon");
    }
}
