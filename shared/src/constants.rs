use std::f64::consts::PI;

pub const TAU: f64 = 2.0 * PI;
// Pointer sits at the top of the wheel: canvas angle 3π/2 (0 is east, clockwise).
pub const POINTER_ANGLE: f64 = 1.5 * PI;

pub const MIN_SPIN_DURATION_MS: f64 = 2200.0;
pub const MAX_SPIN_DURATION_MS: f64 = 3400.0;
pub const MIN_EXTRA_TURNS: f64 = 6.0;
pub const MAX_EXTRA_TURNS: f64 = 12.0;
// Ceilings for configured overrides.
pub const TURNS_CEILING: f64 = 1000.0;
pub const DURATION_CEILING_MS: f64 = 60_000.0;

pub const MIN_OPTIONS_TO_SPIN: usize = 2;

pub const ITEMS_KEY: &str = "stp_items_v1";
pub const SAVED_LISTS_KEY: &str = "stp_saved_lists_v1";
pub const THEME_KEY: &str = "stp_theme_v1";
pub const STATS_KEY: &str = "stp_stats_v1";
pub const SPIN_CONFIG_KEY: &str = "stp_spin_config_v1";

pub const DEFAULT_OPTIONS: [&str; 6] = ["Pizza", "Tacos", "Sushi", "Burgers", "Salad", "Pasta"];

pub const NO_RESULT: &str = "—";
pub const SPINNING_RESULT: &str = "Spinning…";
pub const EMPTY_ODDS_MESSAGE: &str = "Add options to see odds.";
pub const EMPTY_RESULTS_MESSAGE: &str = "Spin the wheel to see results.";
pub const EMPTY_WHEEL_MESSAGE: &str = "Add options to spin!";
