use serde::{Deserialize, Serialize};

use crate::constants::{
    DURATION_CEILING_MS, MAX_EXTRA_TURNS, MAX_SPIN_DURATION_MS, MIN_EXTRA_TURNS, MIN_SPIN_DURATION_MS,
    TURNS_CEILING,
};

/// Tunables for the spin animation. Missing fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinConfig {
    pub min_duration_ms: f64,
    pub max_duration_ms: f64,
    pub min_turns: f64,
    pub max_turns: f64,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            min_duration_ms: MIN_SPIN_DURATION_MS,
            max_duration_ms: MAX_SPIN_DURATION_MS,
            min_turns: MIN_EXTRA_TURNS,
            max_turns: MAX_EXTRA_TURNS,
        }
    }
}

impl SpinConfig {
    /// Orders inverted ranges and bounds both to `[1, ceiling]`, so the target
    /// angle stays finite and the jitter keeps its precision.
    pub fn validated(self) -> Self {
        let defaults = Self::default();
        let finite_or = |v: f64, fallback: f64| if v.is_finite() { v } else { fallback };

        let mut min_duration =
            finite_or(self.min_duration_ms, defaults.min_duration_ms).clamp(1.0, DURATION_CEILING_MS);
        let mut max_duration =
            finite_or(self.max_duration_ms, defaults.max_duration_ms).clamp(1.0, DURATION_CEILING_MS);
        if min_duration > max_duration {
            std::mem::swap(&mut min_duration, &mut max_duration);
        }

        let mut min_turns = finite_or(self.min_turns, defaults.min_turns).clamp(1.0, TURNS_CEILING);
        let mut max_turns = finite_or(self.max_turns, defaults.max_turns).clamp(1.0, TURNS_CEILING);
        if min_turns > max_turns {
            std::mem::swap(&mut min_turns, &mut max_turns);
        }

        Self {
            min_duration_ms: min_duration,
            max_duration_ms: max_duration,
            min_turns,
            max_turns,
        }
    }

    /// Parses a JSON override. Anything unparseable yields the defaults.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<SpinConfig>(raw) {
            Ok(config) => config.validated(),
            Err(e) => {
                log::warn!("Ignoring invalid spin config: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = SpinConfig::default();
        assert_eq!(config.min_duration_ms, 2200.0);
        assert_eq!(config.max_duration_ms, 3400.0);
        assert_eq!(config.min_turns, 6.0);
        assert_eq!(config.max_turns, 12.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SpinConfig::from_json(r#"{"max_turns": 20}"#);
        assert_eq!(config.max_turns, 20.0);
        assert_eq!(config.min_turns, 6.0);
        assert_eq!(config.min_duration_ms, 2200.0);
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert_eq!(SpinConfig::from_json("not json"), SpinConfig::default());
    }

    #[test]
    fn test_validated_swaps_and_clamps() {
        let config = SpinConfig {
            min_duration_ms: 5000.0,
            max_duration_ms: 1000.0,
            min_turns: -3.0,
            max_turns: 0.5,
        }
        .validated();
        assert_eq!(config.min_duration_ms, 1000.0);
        assert_eq!(config.max_duration_ms, 5000.0);
        assert_eq!(config.min_turns, 1.0);
        assert_eq!(config.max_turns, 1.0);
    }

    #[test]
    fn test_huge_override_is_capped() {
        let config = SpinConfig::from_json(
            r#"{"min_turns":1e308,"max_turns":1e308,"min_duration_ms":1e12,"max_duration_ms":1e300}"#,
        );
        assert_eq!(config.min_turns, TURNS_CEILING);
        assert_eq!(config.max_turns, TURNS_CEILING);
        assert_eq!(config.min_duration_ms, DURATION_CEILING_MS);
        assert_eq!(config.max_duration_ms, DURATION_CEILING_MS);
    }
}
