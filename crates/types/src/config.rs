//! Simulation configuration and validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parameters of one simulation run.
///
/// Immutable for the duration of a run; changing any field implies a reset
/// of the driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Track length in meters.
    pub track_length: f64,

    /// Red runner speed in m/s.
    pub red_speed: f64,

    /// Blue runner speed in m/s.
    pub blue_speed: f64,

    /// Head start of blue over red, in meters. Only used by the chase scenario.
    pub initial_gap: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            track_length: 400.0,
            red_speed: 10.0,
            blue_speed: 6.0,
            initial_gap: 100.0,
        }
    }
}

impl SimulationConfig {
    /// Create a configuration with the given track length and speeds.
    pub fn new(track_length: f64, red_speed: f64, blue_speed: f64) -> Self {
        Self {
            track_length,
            red_speed,
            blue_speed,
            ..Default::default()
        }
    }

    /// Set the track length.
    pub fn with_track_length(mut self, track_length: f64) -> Self {
        self.track_length = track_length;
        self
    }

    /// Set the red runner's speed.
    pub fn with_red_speed(mut self, speed: f64) -> Self {
        self.red_speed = speed;
        self
    }

    /// Set the blue runner's speed.
    pub fn with_blue_speed(mut self, speed: f64) -> Self {
        self.blue_speed = speed;
        self
    }

    /// Set the chase head start.
    pub fn with_initial_gap(mut self, gap: f64) -> Self {
        self.initial_gap = gap;
        self
    }

    /// Check that the configuration can be handed to the simulation core.
    ///
    /// The core assumes validated input and has no recovery path of its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.track_length.is_finite() || self.track_length <= 0.0 {
            return Err(ConfigError::TrackLength(self.track_length));
        }
        for (runner, speed) in [("red", self.red_speed), ("blue", self.blue_speed)] {
            if !speed.is_finite() || speed <= 0.0 {
                return Err(ConfigError::Speed { runner, speed });
            }
        }
        if !self.initial_gap.is_finite()
            || self.initial_gap < 0.0
            || self.initial_gap > self.track_length
        {
            return Err(ConfigError::InitialGap {
                gap: self.initial_gap,
                track_length: self.track_length,
            });
        }
        Ok(())
    }
}

/// Reasons a configuration is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Track length must be positive and finite, got {0}")]
    TrackLength(f64),

    #[error("Speed of {runner} runner must be positive and finite, got {speed}")]
    Speed { runner: &'static str, speed: f64 },

    #[error("Initial gap {gap} must lie within [0, {track_length}]")]
    InitialGap { gap: f64, track_length: f64 },
}

/// Ranges offered by the control panel sliders.
///
/// `clamp` snaps an arbitrary request into these ranges so the result always
/// passes [`SimulationConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRanges {
    /// Minimum runner speed (m/s).
    pub min_speed: f64,
    /// Maximum runner speed (m/s).
    pub max_speed: f64,
    /// Speed slider step.
    pub speed_step: f64,
    /// Minimum track length (m).
    pub min_track_length: f64,
    /// Maximum track length (m).
    pub max_track_length: f64,
    /// Track length slider step.
    pub track_length_step: f64,
    /// Gap that must remain between blue's start and the end of the track.
    pub gap_margin: f64,
    /// Gap slider step.
    pub gap_step: f64,
}

impl Default for ControlRanges {
    fn default() -> Self {
        Self {
            min_speed: 1.0,
            max_speed: 20.0,
            speed_step: 0.5,
            min_track_length: 100.0,
            max_track_length: 1000.0,
            track_length_step: 50.0,
            gap_margin: 50.0,
            gap_step: 10.0,
        }
    }
}

impl ControlRanges {
    /// Snap a requested configuration into the slider ranges.
    ///
    /// Non-finite inputs fall back to the range minimum.
    pub fn clamp(&self, requested: SimulationConfig) -> SimulationConfig {
        let track_length = snap(
            requested.track_length,
            self.min_track_length,
            self.max_track_length,
            self.track_length_step,
        );
        let max_gap = (track_length - self.gap_margin).max(0.0);

        SimulationConfig {
            track_length,
            red_speed: snap(
                requested.red_speed,
                self.min_speed,
                self.max_speed,
                self.speed_step,
            ),
            blue_speed: snap(
                requested.blue_speed,
                self.min_speed,
                self.max_speed,
                self.speed_step,
            ),
            initial_gap: snap(requested.initial_gap, 0.0, max_gap, self.gap_step),
        }
    }
}

fn snap(value: f64, min: f64, max: f64, step: f64) -> f64 {
    if !value.is_finite() {
        return min;
    }
    let clamped = value.clamp(min, max);
    if step <= 0.0 {
        return clamped;
    }
    let stepped = min + ((clamped - min) / step).round() * step;
    stepped.clamp(min, max)
}
