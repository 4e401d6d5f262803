use crate::config::SpinConfig;
use crate::constants::{MIN_OPTIONS_TO_SPIN, TAU};
use crate::error::SpinError;
use crate::random::UniformSource;

/// Cubic ease-out: fast start, smooth stop. Input is clamped to `[0, 1]`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// One in-flight spin. Times are in milliseconds on the host's frame clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinSession {
    pub start_angle: f64,
    pub target_angle: f64,
    pub start_time: f64,
    pub duration_ms: f64,
}

impl SpinSession {
    /// Draws a duration, a whole number of extra turns and a jitter in `[0, 2π)`.
    /// The jitter alone decides where the wheel stops, so each segment is equally likely.
    pub fn plan<R: UniformSource + ?Sized>(
        start_angle: f64,
        now: f64,
        config: &SpinConfig,
        rng: &mut R,
    ) -> Self {
        let duration_ms = rng.next_in(config.min_duration_ms, config.max_duration_ms);
        let extra_turns = rng.next_in(config.min_turns, config.max_turns);
        let jitter = rng.next_in(0.0, TAU);

        Self {
            start_angle,
            target_angle: start_angle + extra_turns * TAU + jitter,
            start_time: now,
            duration_ms,
        }
    }

    pub fn progress(&self, now: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let t = (now - self.start_time) / self.duration_ms;
        if t.is_nan() {
            return 0.0;
        }
        t.clamp(0.0, 1.0)
    }

    pub fn angle_at(&self, now: f64) -> f64 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.target_angle;
        }
        self.start_angle + (self.target_angle - self.start_angle) * ease_out_cubic(t)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SpinPhase {
    Idle,
    Spinning(SpinSession),
}

/// What a single animation tick produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinFrame {
    /// No spin was running.
    Idle,
    /// Mid-spin; redraw at `angle` and schedule another tick.
    Moving { angle: f64 },
    /// The spin landed exactly on its target and the animator is idle again.
    Finished { angle: f64 },
}

/// Drives the wheel rotation through `Idle -> Spinning -> Idle`.
///
/// The angle is never normalised between spins, so every spin starts from
/// wherever the last one stopped and always moves forward.
#[derive(Debug, Clone)]
pub struct SpinAnimator {
    angle: f64,
    phase: SpinPhase,
    config: SpinConfig,
}

impl Default for SpinAnimator {
    fn default() -> Self {
        Self::new(SpinConfig::default())
    }
}

impl SpinAnimator {
    pub fn new(config: SpinConfig) -> Self {
        Self {
            angle: 0.0,
            phase: SpinPhase::Idle,
            config: config.validated(),
        }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning(_))
    }

    /// Starts a spin. Leaves all state untouched when rejected.
    pub fn spin<R: UniformSource + ?Sized>(
        &mut self,
        now: f64,
        option_count: usize,
        rng: &mut R,
    ) -> Result<SpinSession, SpinError> {
        if self.is_spinning() {
            return Err(SpinError::AlreadySpinning);
        }
        if option_count < MIN_OPTIONS_TO_SPIN {
            return Err(SpinError::NotEnoughOptions { count: option_count });
        }

        let session = SpinSession::plan(self.angle, now, &self.config, rng);
        log::debug!(
            "Spin started: {:.3} -> {:.3} rad over {:.0}ms",
            session.start_angle,
            session.target_angle,
            session.duration_ms
        );
        self.phase = SpinPhase::Spinning(session);
        Ok(session)
    }

    /// Advances the animation to `now`.
    pub fn tick(&mut self, now: f64) -> SpinFrame {
        let session = match self.phase {
            SpinPhase::Spinning(session) => session,
            SpinPhase::Idle => return SpinFrame::Idle,
        };

        if session.is_finished(now) {
            self.angle = session.target_angle;
            self.phase = SpinPhase::Idle;
            SpinFrame::Finished { angle: self.angle }
        } else {
            self.angle = session.angle_at(now);
            SpinFrame::Moving { angle: self.angle }
        }
    }
}
