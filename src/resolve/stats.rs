use std::collections::BTreeMap;

use super::{LsgType, MatchStrategy};

/// Run-level aggregates over a batch of tagged features.
#[derive(Debug, Clone)]
pub struct MatchStatistics {
    pub total: usize,
    pub matched: usize,
    /// Raw names that fell through every strategy, in first-seen order.
    pub unmatched: Vec<String>,
    pub by_type: BTreeMap<LsgType, usize>,
    pub by_strategy: BTreeMap<MatchStrategy, usize>,
}

impl Default for MatchStatistics {
    fn default() -> Self {
        Self {
            total: 0,
            matched: 0,
            unmatched: Vec::new(),
            by_type: LsgType::ALL.iter().map(|&ty| (ty, 0)).collect(),
            by_strategy: BTreeMap::new(),
        }
    }
}

impl MatchStatistics {
    pub(crate) fn record(&mut self, raw_name: &str, strategy: Option<MatchStrategy>, lsg_type: LsgType) {
        self.total += 1;
        match strategy {
            Some(strategy) => {
                self.matched += 1;
                *self.by_strategy.entry(strategy).or_default() += 1;
            }
            None => self.unmatched.push(raw_name.to_string()),
        }
        *self.by_type.entry(lsg_type).or_default() += 1;
    }

    /// Percentage of features resolved to a district, 0 for an empty batch.
    pub fn match_rate(&self) -> f64 {
        if self.total == 0 { 0.0 } else { 100.0 * self.matched as f64 / self.total as f64 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_has_zero_rate() {
        let stats = MatchStatistics::default();
        assert_eq!(stats.match_rate(), 0.0);
        assert_eq!(stats.by_type.len(), 4);
    }

    #[test]
    fn record_tallies() {
        let mut stats = MatchStatistics::default();
        stats.record("Kochi Corporation", Some(MatchStrategy::Exact), LsgType::MunicipalCorporation);
        stats.record("Nowhere", None, LsgType::Unknown);
        stats.record("Nowhere", None, LsgType::Unknown);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.matched, 1);
        assert_eq!(stats.unmatched, vec!["Nowhere", "Nowhere"]);
        assert_eq!(stats.by_type[&LsgType::Unknown], 2);
        assert_eq!(stats.by_strategy[&MatchStrategy::Exact], 1);
        assert!((stats.match_rate() - 33.333).abs() < 0.01);
    }
}
