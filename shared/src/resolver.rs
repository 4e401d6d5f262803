use crate::constants::{POINTER_ANGLE, TAU};

/// Maps a wheel rotation to the index of the segment under the pointer.
///
/// Segment `i` spans `[i·2π/n, (i+1)·2π/n)` in the wheel's unrotated frame.
/// Returns `None` when there are no options to land on.
pub fn resolve(angle: f64, option_count: usize) -> Option<usize> {
    if option_count == 0 {
        return None;
    }

    let segment_width = TAU / option_count as f64;
    let pointer_angle = (POINTER_ANGLE - angle).rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs, and a
    // non-finite angle yields NaN; both fold back into range here.
    let raw = (pointer_angle / segment_width).floor();
    let index = if raw.is_finite() && raw > 0.0 { raw as usize } else { 0 };
    Some(index % option_count)
}
