use std::fmt;
use std::path::PathBuf;

use anyhow::Result;
use tracing::{info, warn};

use crate::common::{read_feature_collection, require_file_exists, write_feature_collection};
use crate::config::Layout;
use crate::feature::{FeatureCollection, RawFeature};
use crate::reference::ReferenceTable;
use crate::resolve::{DistrictResolver, MatchStatistics};

use super::{banner, capitalize};

/// Unmatched names listed in the summary before truncating.
const UNMATCHED_SHOWN: usize = 20;

#[derive(Debug, Clone)]
pub struct TagSummary {
    pub output: PathBuf,
    pub stats: MatchStatistics,
}

/// Tag every feature of `collection` in place with `district`, `lsg_type`
/// and its display name. No feature is dropped.
pub fn tag_collection(collection: &mut FeatureCollection, table: &ReferenceTable) -> MatchStatistics {
    let mut resolver = DistrictResolver::new(table);
    collection.features = std::mem::take(&mut collection.features)
        .into_iter()
        .map(|feature| resolver.resolve(RawFeature::from_feature(feature)).feature)
        .collect();
    resolver.into_stats()
}

/// `tag-districts`: resolve the district of every raw LSG boundary.
pub fn tag_districts(layout: &Layout) -> Result<TagSummary> {
    let input = layout.raw_lsg();
    require_file_exists(&input, "setup.sh first to download the data")?;

    info!("[tag_districts] reading {}", input.display());
    let mut collection = read_feature_collection(&input)?;

    info!("[tag_districts] processing {} features", collection.len());
    let table = ReferenceTable::kerala();
    let stats = tag_collection(&mut collection, &table);
    if !stats.unmatched.is_empty() {
        warn!("[tag_districts] {} features could not be placed in a district", stats.unmatched.len());
    }

    let output = layout.lsg_with_districts();
    info!("[tag_districts] writing {}", output.display());
    write_feature_collection(&output, &collection)?;

    Ok(TagSummary { output, stats })
}

impl fmt::Display for TagSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.stats;
        banner(f, "SUMMARY")?;
        writeln!(f, "Total features: {}", stats.total)?;
        writeln!(f, "Matched to districts: {} ({:.1}%)", stats.matched, stats.match_rate())?;
        writeln!(f, "Unmatched: {}", stats.unmatched.len())?;

        writeln!(f, "\nFeatures by type:")?;
        for (lsg_type, count) in &stats.by_type {
            writeln!(f, "  {}: {}", capitalize(lsg_type.as_str()), count)?;
        }

        if !stats.by_strategy.is_empty() {
            writeln!(f, "\nMatches by strategy:")?;
            for (strategy, count) in &stats.by_strategy {
                writeln!(f, "  {}: {}", capitalize(strategy.as_str()), count)?;
            }
        }

        if !stats.unmatched.is_empty() {
            writeln!(f, "\nFirst {} unmatched LSGs:", UNMATCHED_SHOWN.min(stats.unmatched.len()))?;
            for name in stats.unmatched.iter().take(UNMATCHED_SHOWN) {
                writeln!(f, "  - {name}")?;
            }
            if stats.unmatched.len() > UNMATCHED_SHOWN {
                writeln!(f, "  ... and {} more", stats.unmatched.len() - UNMATCHED_SHOWN)?;
            }
            writeln!(f, "\nNote: unmatched LSGs need to be added to the reference table")?;
        }

        write!(f, "\nOutput saved to: {}", self.output.display())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map, Value};

    use super::*;
    use crate::feature::Feature;

    fn raw(properties: Value) -> Feature {
        let properties: Map<String, Value> = serde_json::from_value(properties).unwrap();
        Feature::new(properties, Value::Null)
    }

    #[test]
    fn keeps_every_feature() {
        let mut fc = FeatureCollection::new(vec![
            raw(json!({ "name": "Kochi Corporation" })),
            raw(json!({ "name": "Nowhere", "District": "Kollam" })),
            raw(json!({ "name": "Nowhere Else", "osm_id": 42 })),
        ]);

        let stats = tag_collection(&mut fc, &ReferenceTable::kerala());
        assert_eq!(fc.len(), 3);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.matched, 2);
        assert_eq!(stats.unmatched, vec!["Nowhere Else".to_string()]);

        assert_eq!(fc.features[0].property_str("district"), Some("Ernakulam"));
        assert_eq!(fc.features[0].property_str("lsg_type"), Some("municipal corporation"));
        assert_eq!(fc.features[1].property_str("district"), Some("Kollam"));
        assert_eq!(fc.features[2].property_str("district"), Some("Unknown"));
        assert_eq!(fc.features[2].property("osm_id"), Some(&json!(42)));
    }

    #[test]
    fn summary_truncates_unmatched() {
        let mut stats = MatchStatistics::default();
        stats.total = 25;
        stats.unmatched = (0..25).map(|i| format!("LSG {i}")).collect();
        let text = TagSummary { output: PathBuf::from("out.geojson"), stats }.to_string();
        assert!(text.contains("First 20 unmatched LSGs:"));
        assert!(text.contains("... and 5 more"));
        assert!(!text.contains("LSG 20\n"));
    }
}
