//! Configuration types for the simulator.

use crate::error::ConfigFileError;
use crate::frames::FrameConfig;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use travelsim_core::{DetectorConfig, DEFAULT_HISTORY_CAPACITY};
use travelsim_simulation::{ClockConfig, SimulationRunner};
use travelsim_tutor::TutorConfig;
use travelsim_types::{ScenarioPolicy, SimulationConfig};

/// Configuration for a headless run.
///
/// Every field is optional in TOML; missing ones take their defaults.
///
/// ```toml
/// scenario = "round-trip"
/// duration_secs = 120.0
///
/// [simulation]
/// track_length = 400.0
/// red_speed = 10.0
///
/// [frames]
/// fps = 60.0
/// jitter_seed = 7
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Which travel problem to run.
    pub scenario: ScenarioPolicy,

    /// Track and runner parameters.
    pub simulation: SimulationConfig,

    /// Crossing-detection tuning.
    pub detector: DetectorConfig,

    /// Largest simulated step per frame, in milliseconds.
    pub max_delta_ms: u64,

    /// Number of chart samples kept.
    pub history_capacity: usize,

    /// Simulated time to run for, in seconds.
    pub duration_secs: f64,

    /// Display-refresh timeline.
    pub frames: FrameConfig,

    /// Tutor settings used by `travelsim ask`.
    pub tutor: TutorConfig,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            scenario: ScenarioPolicy::default(),
            simulation: SimulationConfig::default(),
            detector: DetectorConfig::default(),
            max_delta_ms: 100,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            duration_secs: 120.0,
            frames: FrameConfig::default(),
            tutor: TutorConfig::default(),
        }
    }
}

impl SimulatorConfig {
    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigFileError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigFileError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the scenario.
    pub fn with_scenario(mut self, scenario: ScenarioPolicy) -> Self {
        self.scenario = scenario;
        self
    }

    /// Set the simulation parameters.
    pub fn with_simulation(mut self, simulation: SimulationConfig) -> Self {
        self.simulation = simulation;
        self
    }

    /// Set the detector tuning.
    pub fn with_detector(mut self, detector: DetectorConfig) -> Self {
        self.detector = detector;
        self
    }

    /// Set the simulated run length.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration_secs = duration.as_secs_f64();
        self
    }

    /// Set the frame timeline.
    pub fn with_frames(mut self, frames: FrameConfig) -> Self {
        self.frames = frames;
        self
    }

    /// Set the tutor settings.
    pub fn with_tutor(mut self, tutor: TutorConfig) -> Self {
        self.tutor = tutor;
        self
    }

    /// Check every section.
    pub fn validate(&self) -> Result<(), ConfigFileError> {
        self.simulation.validate()?;
        self.frames.validate()?;
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(ConfigFileError::Duration(self.duration_secs));
        }
        if self.max_delta_ms == 0 {
            return Err(ConfigFileError::MaxDelta(self.max_delta_ms));
        }
        Ok(())
    }

    /// Clock settings for the frame clock.
    pub fn clock_config(&self) -> ClockConfig {
        ClockConfig::default().with_max_delta(Duration::from_millis(self.max_delta_ms))
    }

    /// Build a fresh simulation runner.
    pub fn to_runner(&self) -> SimulationRunner {
        SimulationRunner::new(self.simulation, self.scenario)
            .with_detector_config(self.detector)
            .with_history_capacity(self.history_capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = SimulatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, SimulatorConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config = SimulatorConfig::from_toml_str(
            r#"
            scenario = "circular"
            duration_secs = 30.0

            [simulation]
            blue_speed = 7.0

            [detector]
            debounce = 0.5

            [frames]
            fps = 30.0
            jitter_seed = 3

            [tutor]
            history_window = 6
            "#,
        )
        .unwrap();

        assert_eq!(config.scenario, ScenarioPolicy::Circular);
        assert_eq!(config.duration_secs, 30.0);
        assert_eq!(config.simulation.blue_speed, 7.0);
        assert_eq!(config.simulation.red_speed, 10.0);
        assert_eq!(config.detector.debounce, 0.5);
        assert_eq!(config.detector.proximity_fraction, 0.2);
        assert_eq!(config.frames.fps, 30.0);
        assert_eq!(config.frames.jitter_seed, Some(3));
        assert_eq!(config.tutor.history_window, 6);
        assert_eq!(config.tutor.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_invalid_toml() {
        let err = SimulatorConfig::from_toml_str("scenario = \"sideways\"").unwrap_err();
        assert!(matches!(err, ConfigFileError::Toml(_)));
    }

    #[test]
    fn test_validate_rejects_bad_sections() {
        let bad_track = SimulatorConfig::default()
            .with_simulation(SimulationConfig::default().with_track_length(-1.0));
        assert!(matches!(
            bad_track.validate(),
            Err(ConfigFileError::Simulation(_))
        ));

        let bad_duration = SimulatorConfig::default().with_duration(Duration::ZERO);
        assert!(matches!(
            bad_duration.validate(),
            Err(ConfigFileError::Duration(_))
        ));
    }

    #[test]
    fn test_zero_max_delta_rejected() {
        let config =
            SimulatorConfig::from_toml_str("max_delta_ms = 0\nduration_secs = 1.0").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigFileError::MaxDelta(0))
        ));

        let config = SimulatorConfig::from_toml_str("max_delta_ms = 1").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file() {
        let err = SimulatorConfig::load("/nonexistent/travelsim.toml").unwrap_err();
        assert!(matches!(err, ConfigFileError::Io { .. }));
    }

    #[test]
    fn test_to_runner() {
        let config = SimulatorConfig::default().with_scenario(ScenarioPolicy::LinearChase);
        let runner = config.to_runner();
        assert_eq!(runner.scenario(), ScenarioPolicy::LinearChase);
        assert_eq!(runner.history().capacity(), DEFAULT_HISTORY_CAPACITY);
        assert_eq!(config.clock_config(), ClockConfig::default());
    }
}
