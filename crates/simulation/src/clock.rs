//! Display-refresh clock.
//!
//! Turns wall-clock frame timestamps into bounded simulation deltas.

use std::time::Duration;
use tracing::debug;

/// Configuration for the frame clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    /// Largest delta handed to the simulation per frame.
    ///
    /// Bounds per-tick displacement (the circular wrap guard relies on it)
    /// and keeps a stalled or backgrounded display from producing one huge
    /// catch-up jump.
    pub max_delta: Duration,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            max_delta: Duration::from_millis(100),
        }
    }
}

impl ClockConfig {
    /// Set the maximum per-frame delta.
    pub fn with_max_delta(mut self, max_delta: Duration) -> Self {
        self.max_delta = max_delta;
        self
    }
}

/// Pausable frame clock.
///
/// The first frame after starting or resuming only records a reference
/// timestamp; ticks begin with the second frame.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    config: ClockConfig,
    running: bool,
    previous: Option<Duration>,
}

impl FrameClock {
    /// Create a paused clock.
    pub fn new(config: ClockConfig) -> Self {
        Self {
            config,
            running: false,
            previous: None,
        }
    }

    /// The clock's configuration.
    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Whether frames currently produce ticks.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start (or resume) ticking.
    pub fn start(&mut self) {
        self.running = true;
        self.previous = None;
    }

    /// Stop ticking and forget the reference timestamp.
    pub fn pause(&mut self) {
        self.running = false;
        self.previous = None;
    }

    /// Flip between running and paused. Returns the new running state.
    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
        self.running
    }

    /// Feed one display-refresh timestamp.
    ///
    /// Returns the clamped delta in seconds to advance the simulation by, or
    /// `None` when paused or on the first frame after starting.
    pub fn on_frame(&mut self, now: Duration) -> Option<f64> {
        if !self.running {
            return None;
        }

        let previous = self.previous.replace(now)?;
        let raw = now.saturating_sub(previous);
        if raw > self.config.max_delta {
            debug!(
                raw_ms = raw.as_millis() as u64,
                max_ms = self.config.max_delta.as_millis() as u64,
                "Clamping frame delta"
            );
        }
        Some(raw.min(self.config.max_delta).as_secs_f64())
    }
}
