//! Lightweight client-side search index built from the final LSG file.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::feature::{Feature, FeatureCollection};
use crate::geom::vertex_mean_centroid;
use crate::officials::Officials;
use crate::resolve::LsgType;

/// `type` given to entries whose feature has no `lsg_type`.
pub const DEFAULT_ENTRY_TYPE: &str = "lsg";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchEntry {
    /// 1-based position of the feature in the source collection.
    pub id: usize,
    pub name: String,
    pub name_ml: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub district: String,
    pub centroid: [f64; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Head>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secretary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wikidata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mla_constituency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mp_constituency: Option<String>,
}

/// Head of the LSG: the president, or the mayor of a corporation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Head {
    pub name: String,
    pub title: String,
}

impl SearchEntry {
    /// Build the entry for the feature at 1-based position `id`.
    /// Returns `None` when no centroid can be derived from its geometry.
    pub fn from_feature(id: usize, feature: &Feature) -> Option<Self> {
        let centroid = vertex_mean_centroid(&feature.geometry)?;

        let kind = feature.property_str("lsg_type").unwrap_or(DEFAULT_ENTRY_TYPE).to_string();
        let officials = feature
            .property("officials")
            .and_then(|value| serde_json::from_value::<Officials>(value.clone()).ok());

        let head = officials
            .as_ref()
            .filter(|o| !o.president.name.is_empty())
            .map(|o| Head {
                name: o.president.name.clone(),
                title: head_title(&kind).to_string(),
            });
        let secretary = officials
            .map(|o| o.secretary.name)
            .filter(|name| !name.is_empty());

        let flat = |key: &str| feature.non_empty_str(key).map(str::to_string);

        Some(Self {
            id,
            name: feature.property_str("name").unwrap_or_default().to_string(),
            name_ml: feature.property_str("name:ml").unwrap_or_default().to_string(),
            district: feature.property_str("district").unwrap_or_default().to_string(),
            centroid,
            head,
            secretary,
            website: flat("website"),
            wikidata: flat("wikidata"),
            mla_constituency: flat("mla_constituency"),
            mp_constituency: flat("mp_constituency"),
            kind,
        })
    }
}

/// `Mayor` for `municipal corporation` entries, `President` otherwise.
/// Corporations are deliberately titled `Mayor` even though older indexes
/// said `President` for every entry.
fn head_title(kind: &str) -> &'static str {
    LsgType::from_label(kind).unwrap_or(LsgType::Unknown).head_title()
}

/// Search entries plus the tallies reported after a build.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    pub entries: Vec<SearchEntry>,
    /// Features dropped for lack of a centroid.
    pub skipped: usize,
}

impl SearchIndex {
    pub fn build(collection: &FeatureCollection) -> Self {
        let mut index = Self::default();
        for (position, feature) in collection.features.iter().enumerate() {
            match SearchEntry::from_feature(position + 1, feature) {
                Some(entry) => index.entries.push(entry),
                None => {
                    debug!("no centroid for feature #{}, skipping", position + 1);
                    index.skipped += 1;
                }
            }
        }
        index
    }

    #[inline] pub fn len(&self) -> usize { self.entries.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn counts_by_type(&self) -> BTreeMap<&str, usize> {
        tally(self.entries.iter().map(|e| e.kind.as_str()))
    }

    pub fn counts_by_district(&self) -> BTreeMap<&str, usize> {
        tally(self.entries.iter().map(|e| e.district.as_str()))
    }
}

fn tally<'a>(keys: impl Iterator<Item = &'a str>) -> BTreeMap<&'a str, usize> {
    let mut counts = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map, Value};

    use super::*;

    fn square() -> Value {
        json!({ "type": "Polygon", "coordinates": [[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]]] })
    }

    fn feature(properties: Value, geometry: Value) -> Feature {
        let properties: Map<String, Value> = serde_json::from_value(properties).unwrap();
        Feature::new(properties, geometry)
    }

    #[test]
    fn ids_stay_positional_across_skips() {
        let fc = FeatureCollection::new(vec![
            feature(json!({ "name": "A" }), Value::Null),
            feature(json!({ "name": "B" }), square()),
            feature(json!({ "name": "C" }), json!({ "type": "Point", "coordinates": [1.0, 1.0] })),
            feature(json!({ "name": "D" }), square()),
        ]);

        let index = SearchIndex::build(&fc);
        assert_eq!(index.skipped, 2);
        let ids: Vec<usize> = index.entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 4]);
        assert_eq!(index.entries[0].centroid, [1.0, 1.0]);
    }

    #[test]
    fn defaults_and_optional_fields() {
        let entry = SearchEntry::from_feature(1, &feature(json!({ "name": "Agali", "website": "" }), square())).unwrap();
        assert_eq!(entry.kind, DEFAULT_ENTRY_TYPE);
        assert_eq!(entry.district, "");
        assert_eq!(entry.website, None);

        let out = serde_json::to_value(&entry).unwrap();
        assert_eq!(out["type"], "lsg");
        assert_eq!(out["name_ml"], "");
        assert!(out.get("head").is_none());
        assert!(out.get("website").is_none());
    }

    #[test]
    fn head_title_follows_type() {
        let officials = json!({
            "president": { "name": "A. Kumar", "party": "", "contact": "", "email": "" },
            "secretary": { "name": "", "contact": "", "email": "" },
        });
        let corp = feature(
            json!({ "name": "Kochi", "lsg_type": "municipal corporation", "officials": officials, "wikidata": "Q1800" }),
            square(),
        );
        let entry = SearchEntry::from_feature(3, &corp).unwrap();
        assert_eq!(entry.head, Some(Head { name: "A. Kumar".into(), title: "Mayor".into() }));
        assert_eq!(entry.secretary, None);
        assert_eq!(entry.wikidata.as_deref(), Some("Q1800"));

        let gp = feature(json!({ "name": "Agali", "lsg_type": "gram panchayat", "officials": officials }), square());
        assert_eq!(SearchEntry::from_feature(4, &gp).unwrap().head.unwrap().title, "President");
    }

    #[test]
    fn counts_by_type_and_district() {
        let fc = FeatureCollection::new(vec![
            feature(json!({ "lsg_type": "municipality", "district": "Ernakulam" }), square()),
            feature(json!({ "lsg_type": "municipality", "district": "Kollam" }), square()),
            feature(json!({ "district": "Kollam" }), square()),
        ]);
        let index = SearchIndex::build(&fc);
        assert_eq!(index.counts_by_type().get("municipality"), Some(&2));
        assert_eq!(index.counts_by_type().get("lsg"), Some(&1));
        assert_eq!(index.counts_by_district().get("Kollam"), Some(&2));
    }
}
