use ahash::AHashMap;
use serde_json::Value;
use tracing::debug;

use crate::config::UNKNOWN_DISTRICT;
use crate::feature::{RawFeature, ResolvedFeature};
use crate::reference::ReferenceTable;

use super::{normalize_name, LsgType, MatchStatistics, SuffixPolicy};

/// Canonical suffixes tried, in order, when synthesizing full names.
pub const SYNTHESIZED_SUFFIXES: [&str; 4] = ["Corporation", "Municipality", "Grama Panchayat", "Block Panchayat"];

/// Which step of the cascade placed a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchStrategy {
    /// The source data already carried a district.
    DistrictHint,
    /// The raw name is listed verbatim in the reference table.
    Exact,
    /// The normalized name matches a normalized reference name.
    Normalized,
    /// `"<name> <suffix>"` is listed for one of [`SYNTHESIZED_SUFFIXES`].
    SuffixSynthesis,
}

impl MatchStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStrategy::DistrictHint => "district hint",
            MatchStrategy::Exact => "exact name",
            MatchStrategy::Normalized => "normalized name",
            MatchStrategy::SuffixSynthesis => "synthesized suffix",
        }
    }
}

/// Outcome of the district cascade for one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Matched { district: String, strategy: MatchStrategy },
    Unknown,
}

impl Resolution {
    /// Resolved district, or the `Unknown` sentinel.
    pub fn district(&self) -> &str {
        match self {
            Resolution::Matched { district, .. } => district,
            Resolution::Unknown => UNKNOWN_DISTRICT,
        }
    }

    pub fn strategy(&self) -> Option<MatchStrategy> {
        match self {
            Resolution::Matched { strategy, .. } => Some(*strategy),
            Resolution::Unknown => None,
        }
    }
}

/// Resolves LSG names to districts against a reference table, accumulating
/// statistics for the batch it is fed.
#[derive(Debug)]
pub struct DistrictResolver<'a> {
    table: &'a ReferenceTable,
    policy: SuffixPolicy,
    normalized: AHashMap<String, String>, // normalized reference name -> district
    stats: MatchStatistics,
}

impl<'a> DistrictResolver<'a> {
    /// Resolver using the recursive normalization policy of district tagging.
    pub fn new(table: &'a ReferenceTable) -> Self {
        Self::with_policy(table, SuffixPolicy::Recursive)
    }

    pub fn with_policy(table: &'a ReferenceTable, policy: SuffixPolicy) -> Self {
        let mut normalized = AHashMap::with_capacity(table.len());
        for entry in table.entries() {
            normalized.insert(normalize_name(&entry.name, policy), entry.district.clone());
        }
        Self { table, policy, normalized, stats: MatchStatistics::default() }
    }

    #[inline] pub fn into_stats(self) -> MatchStatistics { self.stats }

    /// Run the cascade for one name. The first strategy that succeeds wins.
    pub fn resolve_district(&self, name: &str, district_hint: Option<&str>) -> Resolution {
        let matched = |district: &str, strategy| Resolution::Matched { district: district.to_string(), strategy };

        if let Some(hint) = district_hint.filter(|h| !h.is_empty() && *h != UNKNOWN_DISTRICT) {
            return matched(hint, MatchStrategy::DistrictHint);
        }

        if let Some(district) = self.table.district_of(name) {
            return matched(district, MatchStrategy::Exact);
        }

        if let Some(district) = self.normalized.get(&normalize_name(name, self.policy)) {
            return matched(district, MatchStrategy::Normalized);
        }

        SYNTHESIZED_SUFFIXES.iter()
            .find_map(|suffix| self.table.district_of(&format!("{name} {suffix}")))
            .map_or(Resolution::Unknown, |district| matched(district, MatchStrategy::SuffixSynthesis))
    }

    /// Tag one feature with `district`, `lsg_type` and a display name, and
    /// record the outcome in the batch statistics.
    pub fn resolve(&mut self, raw: RawFeature) -> ResolvedFeature {
        let resolution = self.resolve_district(&raw.name, raw.district_hint.as_deref());
        let lsg_type = LsgType::infer(&raw.name, raw.local_auth.as_deref(), raw.admin_level.as_deref());

        let strategy = resolution.strategy();
        match strategy {
            Some(strategy) => debug!("{:?} -> {} via {}", raw.name, resolution.district(), strategy.as_str()),
            None => debug!("{:?} unmatched", raw.name),
        }
        self.stats.record(&raw.name, strategy, lsg_type);

        let display_name = normalize_name(&raw.name, SuffixPolicy::Recursive);
        let district = resolution.district().to_string();

        let mut feature = raw.feature;
        feature.set_property("name", Value::String(display_name));
        feature.set_property("district", Value::String(district.clone()));
        feature.set_property("lsg_type", Value::String(lsg_type.as_str().to_string()));

        ResolvedFeature { raw_name: raw.name, district, lsg_type, strategy, feature }
    }
}
