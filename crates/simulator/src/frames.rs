//! Synthetic display-refresh timestamps.

use crate::error::ConfigFileError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Shape of the generated frame timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Nominal refresh rate.
    pub fps: f64,

    /// Maximum deviation of a frame interval, as a fraction of the nominal
    /// interval. Only applied when `jitter_seed` is set.
    pub jitter: f64,

    /// Seed for the jitter RNG. `None` produces a perfectly regular timeline.
    pub jitter_seed: Option<u64>,

    /// Insert a stall before every n-th frame, as when the page is
    /// backgrounded.
    pub stall_every: Option<u64>,

    /// Length of each stall in milliseconds.
    pub stall_ms: u64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            fps: 60.0,
            jitter: 0.5,
            jitter_seed: None,
            stall_every: None,
            stall_ms: 3_000,
        }
    }
}

impl FrameConfig {
    /// Set the refresh rate.
    pub fn with_fps(mut self, fps: f64) -> Self {
        self.fps = fps;
        self
    }

    /// Enable seeded jitter of the given fraction.
    pub fn with_jitter(mut self, seed: u64, jitter: f64) -> Self {
        self.jitter_seed = Some(seed);
        self.jitter = jitter;
        self
    }

    /// Stall for `stall` before every `every`-th frame.
    pub fn with_stalls(mut self, every: u64, stall: Duration) -> Self {
        self.stall_every = Some(every);
        self.stall_ms = stall.as_millis() as u64;
        self
    }

    /// Nominal interval between frames.
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps)
    }

    /// Check the frame parameters.
    pub fn validate(&self) -> Result<(), ConfigFileError> {
        if !self.fps.is_finite() || !(1.0..=1000.0).contains(&self.fps) {
            return Err(ConfigFileError::Frames(format!(
                "fps must be in [1, 1000], got {}",
                self.fps
            )));
        }
        if !(0.0..1.0).contains(&self.jitter) {
            return Err(ConfigFileError::Frames(format!(
                "jitter must be in [0, 1), got {}",
                self.jitter
            )));
        }
        if self.stall_every == Some(0) {
            return Err(ConfigFileError::Frames(
                "stall_every must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Infinite iterator of strictly increasing frame timestamps, starting at
/// zero.
///
/// Deterministic for a given [`FrameConfig`]: the same seed always yields
/// the same timeline.
#[derive(Debug, Clone)]
pub struct FrameSchedule {
    config: FrameConfig,
    rng: Option<ChaCha8Rng>,
    next: Duration,
    index: u64,
}

impl FrameSchedule {
    /// Create a schedule. `config` should already be validated.
    pub fn new(config: FrameConfig) -> Self {
        Self {
            config,
            rng: config.jitter_seed.map(ChaCha8Rng::seed_from_u64),
            next: Duration::ZERO,
            index: 0,
        }
    }

    /// Number of frames yielded so far.
    pub fn frames(&self) -> u64 {
        self.index
    }

    fn next_interval(&mut self) -> Duration {
        let nominal = 1.0 / self.config.fps;
        let factor = match self.rng.as_mut() {
            Some(rng) if self.config.jitter > 0.0 => {
                1.0 + rng.gen_range(-self.config.jitter..self.config.jitter)
            }
            _ => 1.0,
        };
        Duration::from_secs_f64(nominal * factor)
    }
}

impl Iterator for FrameSchedule {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        let now = self.next;
        self.index += 1;

        let mut interval = self.next_interval();
        if let Some(every) = self.config.stall_every {
            if self.index % every == 0 {
                interval += Duration::from_millis(self.config.stall_ms);
            }
        }
        self.next = now + interval;
        Some(now)
    }
}
