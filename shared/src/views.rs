//! Odds and results rows for the stats panels.

use std::cmp::Ordering;

use crate::ledger::StatsLedger;

#[derive(Debug, Clone, PartialEq)]
pub struct OddsRow {
    pub label: String,
    pub probability: f64,
    pub percent: String,
    pub badge: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub label: String,
    pub count: u64,
    pub observed: f64,
    pub percent: String,
}

/// Case-insensitive label ordering with a byte-wise tie break.
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Theoretical odds for the listed options, alphabetical.
pub fn odds_view<S: AsRef<str>>(options: &[S]) -> Vec<OddsRow> {
    let n = options.len();
    let probability = StatsLedger::theoretical_probability(n);
    let mut sorted: Vec<&str> = options.iter().map(|s| s.as_ref()).collect();
    sorted.sort_by(|a, b| compare_labels(a, b));

    sorted
        .into_iter()
        .map(|label| OddsRow {
            label: label.to_string(),
            probability,
            percent: format_percent(probability),
            badge: format!("1 / {}", n),
        })
        .collect()
}

/// Observed results for the listed options, most wins first.
pub fn results_view<S: AsRef<str>>(ledger: &StatsLedger, options: &[S]) -> Vec<ResultRow> {
    let mut rows: Vec<ResultRow> = options
        .iter()
        .map(|label| {
            let label = label.as_ref();
            let observed = ledger.observed_probability(label);
            ResultRow {
                label: label.to_string(),
                count: ledger.count(label),
                observed,
                percent: format_percent(observed),
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| compare_labels(&a.label, &b.label))
    });
    rows
}

/// Formats a fraction in `[0, 1]` with precision that shrinks as the value grows.
pub fn format_percent(x: f64) -> String {
    let pct = x * 100.0;
    if pct == 0.0 {
        "0%".to_string()
    } else if pct < 1.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{}%", pct.round())
    }
}
