use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Running win tally, keyed by option label.
///
/// Keys are never dropped when options disappear, so history comes back if a
/// label is re-added. `total` only moves on recorded wins and resets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsLedger {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub counts: BTreeMap<String, u64>,
}

impl StatsLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a zero entry for every listed label that has none yet.
    pub fn reconcile<S: AsRef<str>>(&mut self, options: &[S]) {
        for label in options {
            let label = label.as_ref();
            if !self.counts.contains_key(label) {
                self.counts.insert(label.to_string(), 0);
            }
        }
    }

    /// Counts one win for `label`, even if it is not among `options`.
    pub fn record_win<S: AsRef<str>>(&mut self, label: &str, options: &[S]) {
        self.reconcile(options);
        *self.counts.entry(label.to_string()).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn reset(&mut self) {
        self.total = 0;
        self.counts.clear();
    }

    pub fn count(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Uniform chance per listed option; zero when nothing is listed.
    pub fn theoretical_probability(option_count: usize) -> f64 {
        if option_count == 0 {
            0.0
        } else {
            1.0 / option_count as f64
        }
    }

    pub fn observed_probability(&self, label: &str) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(label) as f64 / self.total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_record_win_is_additive() {
        let options = labels(&["A", "B"]);
        let mut ledger = StatsLedger::new();
        ledger.record_win("A", &options);
        let before_count = ledger.count("B");
        let before_total = ledger.total;
        for _ in 0..5 {
            ledger.record_win("B", &options);
        }
        assert_eq!(ledger.count("B"), before_count + 5);
        assert_eq!(ledger.total, before_total + 5);
    }

    #[test]
    fn test_wins_from_empty_ledger() {
        let options = labels(&["A", "B", "C"]);
        let mut ledger = StatsLedger::new();
        for _ in 0..3 {
            ledger.record_win("B", &options);
        }
        ledger.record_win("A", &options);
        assert_eq!(ledger.count("A"), 1);
        assert_eq!(ledger.count("B"), 3);
        assert_eq!(ledger.count("C"), 0);
        assert_eq!(ledger.total, 4);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let options = labels(&["A", "B"]);
        let mut ledger = StatsLedger::new();
        ledger.record_win("A", &options);
        ledger.reconcile(&options);
        let once = ledger.clone();
        ledger.reconcile(&options);
        assert_eq!(ledger, once);
    }

    #[test]
    fn test_reconcile_keeps_removed_labels() {
        let mut ledger = StatsLedger::new();
        let all = labels(&["A", "B", "C"]);
        ledger.record_win("B", &all);
        ledger.record_win("B", &all);

        let fewer = labels(&["A", "C"]);
        ledger.reconcile(&fewer);
        assert_eq!(ledger.count("B"), 2);
        assert!(ledger.counts.contains_key("B"));
        assert_eq!(StatsLedger::theoretical_probability(fewer.len()), 0.5);
    }

    #[test]
    fn test_unlisted_winner_still_recorded() {
        let mut ledger = StatsLedger::new();
        ledger.record_win("Ghost", &labels(&["A"]));
        assert_eq!(ledger.count("Ghost"), 1);
        assert_eq!(ledger.count("A"), 0);
        assert_eq!(ledger.total, 1);
    }

    #[test]
    fn test_reset_clears_everything() {
        let options = labels(&["A", "B"]);
        let mut ledger = StatsLedger::new();
        ledger.record_win("A", &options);
        ledger.record_win("B", &options);
        ledger.reset();
        assert_eq!(ledger.total, 0);
        assert!(ledger.counts.is_empty());
    }

    #[test]
    fn test_observed_probability() {
        let options = labels(&["A", "B"]);
        let mut ledger = StatsLedger::new();
        assert_eq!(ledger.observed_probability("A"), 0.0);
        ledger.record_win("A", &options);
        ledger.record_win("A", &options);
        ledger.record_win("A", &options);
        ledger.record_win("B", &options);
        assert_eq!(ledger.observed_probability("A"), 0.75);
        assert_eq!(ledger.observed_probability("B"), 0.25);
        assert_eq!(ledger.observed_probability("missing"), 0.0);
    }

    #[test]
    fn test_loads_legacy_blob() {
        let ledger: StatsLedger = serde_json::from_str(r#"{"total":3,"counts":{"A":1,"B":2}}"#).unwrap();
        assert_eq!(ledger.total, 3);
        assert_eq!(ledger.count("B"), 2);

        let partial: StatsLedger = serde_json::from_str(r#"{"counts":{}}"#).unwrap();
        assert_eq!(partial, StatsLedger::new());
    }
}
