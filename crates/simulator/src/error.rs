//! Error types for the headless simulator.

use std::path::PathBuf;
use thiserror::Error;
use travelsim_types::ConfigError;

/// Errors while loading or validating a simulator configuration.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid simulation config: {0}")]
    Simulation(#[from] ConfigError),

    #[error("Invalid frame schedule: {0}")]
    Frames(String),

    #[error("Invalid run duration: {0} s")]
    Duration(f64),

    #[error("max_delta_ms must be at least 1, got {0}")]
    MaxDelta(u64),
}

/// Errors setting up a [`Simulator`](crate::Simulator).
#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error(transparent)]
    Config(#[from] ConfigFileError),

    #[error("Failed to create frame histogram: {0}")]
    Histogram(#[from] hdrhistogram::CreationError),
}
