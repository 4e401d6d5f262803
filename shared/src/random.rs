//! Uniform random source behind the spin and shuffle commands.
//!
//! Production code hands in any `rand::Rng`; tests script exact draws with
//! [`FixedSource`] so target angles and shuffles are reproducible.

use rand::Rng;

pub trait UniformSource {
    /// Next draw in `[0.0, 1.0)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform draw in `[low, high)`.
    fn next_in(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_unit() * (high - low)
    }

    /// Uniform index in `0..bound`. `bound` must be non-zero.
    fn next_index(&mut self, bound: usize) -> usize {
        let idx = (self.next_unit() * bound as f64).floor() as usize;
        idx.min(bound.saturating_sub(1))
    }
}

impl<R: Rng + ?Sized> UniformSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays a fixed cycle of unit draws.
#[derive(Debug, Clone)]
pub struct FixedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }
}

// Not an `Rng`, so this does not overlap the blanket impl above.
impl UniformSource for FixedSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        // keep scripted values inside the half-open unit range
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
