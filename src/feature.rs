use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::resolve::{LsgType, MatchStrategy};

/// A GeoJSON FeatureCollection. Members other than `features` (e.g. `name`,
/// `crs`) are carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default = "FeatureCollection::kind")]
    pub kind: String,
    pub features: Vec<Feature>,
    #[serde(flatten)]
    pub foreign: Map<String, Value>,
}

impl FeatureCollection {
    fn kind() -> String { "FeatureCollection".to_string() }

    pub fn new(features: Vec<Feature>) -> Self {
        Self { kind: Self::kind(), features, foreign: Map::new() }
    }

    #[inline] pub fn len(&self) -> usize { self.features.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.features.is_empty() }
}

/// A GeoJSON Feature with free-form properties and a raw geometry value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default = "Feature::kind")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub geometry: Value,
    #[serde(flatten)]
    pub foreign: Map<String, Value>,
}

impl Feature {
    fn kind() -> String { "Feature".to_string() }

    pub fn new(properties: Map<String, Value>, geometry: Value) -> Self {
        Self { kind: Self::kind(), properties, geometry, foreign: Map::new() }
    }

    #[inline]
    pub fn property(&self, key: &str) -> Option<&Value> { self.properties.get(key) }

    /// String property, `None` when absent or not a string.
    #[inline]
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }

    /// String property that is present and non-empty.
    #[inline]
    pub fn non_empty_str(&self, key: &str) -> Option<&str> {
        self.property_str(key).filter(|s| !s.is_empty())
    }

    /// Property that may be stored as a string or an integer, as text.
    pub fn property_text(&self, key: &str) -> Option<String> {
        match self.properties.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
            _ => None,
        }
    }

    /// Insert or replace a property, keeping the position of an existing key.
    #[inline]
    pub fn set_property(&mut self, key: &str, value: Value) {
        self.properties.insert(key.to_string(), value);
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Map<String, Value>, D::Error> {
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

/// An LSG boundary as read from the raw data, before district tagging.
#[derive(Debug, Clone)]
pub struct RawFeature {
    pub name: String,
    /// `District` as supplied upstream, if any.
    pub district_hint: Option<String>,
    pub local_auth: Option<String>,
    /// `admin_leve` (shapefile-truncated column name), as text.
    pub admin_level: Option<String>,
    pub feature: Feature,
}

impl RawFeature {
    pub fn from_feature(feature: Feature) -> Self {
        Self {
            name: feature.property_str("name").unwrap_or_default().to_string(),
            district_hint: feature.property_str("District").map(str::to_string),
            local_auth: feature.property_str("local_auth").map(str::to_string),
            admin_level: feature.property_text("admin_leve"),
            feature,
        }
    }
}

/// A feature after district tagging. `feature` already carries the
/// `name`, `district` and `lsg_type` properties.
#[derive(Debug, Clone)]
pub struct ResolvedFeature {
    pub raw_name: String,
    pub district: String,
    pub lsg_type: LsgType,
    /// `None` when the district is the `Unknown` sentinel.
    pub strategy: Option<MatchStrategy>,
    pub feature: Feature,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn foreign_members_survive() {
        let fc: FeatureCollection = serde_json::from_value(json!({
            "type": "FeatureCollection",
            "name": "kerala_lsg",
            "features": [{ "type": "Feature", "id": 7, "properties": null, "geometry": null }],
        })).unwrap();
        assert_eq!(fc.foreign["name"], "kerala_lsg");
        assert!(fc.features[0].properties.is_empty());

        let out = serde_json::to_value(&fc).unwrap();
        assert_eq!(out["name"], "kerala_lsg");
        assert_eq!(out["features"][0]["id"], 7);
    }

    #[test]
    fn raw_feature_reads_hints() {
        let feature: Feature = serde_json::from_value(json!({
            "type": "Feature",
            "properties": { "name": "Aluva", "District": "Ernakulam", "admin_leve": 8, "local_auth": "municipality" },
            "geometry": null,
        })).unwrap();
        let raw = RawFeature::from_feature(feature);
        assert_eq!(raw.name, "Aluva");
        assert_eq!(raw.district_hint.as_deref(), Some("Ernakulam"));
        assert_eq!(raw.admin_level.as_deref(), Some("8"));
        assert_eq!(raw.local_auth.as_deref(), Some("municipality"));
    }

    #[test]
    fn missing_name_is_empty() {
        let raw = RawFeature::from_feature(Feature::new(Map::new(), Value::Null));
        assert_eq!(raw.name, "");
        assert_eq!(raw.district_hint, None);
    }
}
