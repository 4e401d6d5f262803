use spinpick_shared::constants::SPIN_CONFIG_KEY;
use spinpick_shared::SpinConfig;
use web_sys::window;

pub fn spin_config() -> SpinConfig {
    // An optional JSON override lets the spin feel be tuned without a rebuild
    let raw = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(SPIN_CONFIG_KEY).ok().flatten());

    match raw {
        Some(raw) => SpinConfig::from_json(&raw),
        None => SpinConfig::default(),
    }
}

/// Milliseconds on the same clock `requestAnimationFrame` hands to its callbacks.
pub fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}
