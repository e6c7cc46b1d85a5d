//! Core data types for the travel-problem simulator.
//!
//! Everything here is plain data: runner state, run configuration, the
//! scenario policy tag, history samples and meeting events. Behavior lives in
//! `travelsim-core` (motion, detection, history) and
//! `travelsim-simulation` (the driver).

mod config;
mod event;
mod history;
mod identifiers;
mod scenario;
mod state;

pub use config::{ConfigError, ControlRanges, SimulationConfig};
pub use event::{EventKind, MeetingEvent};
pub use history::HistoryPoint;
pub use identifiers::{Direction, RunnerId};
pub use scenario::{Boundary, ScenarioPolicy};
pub use state::{RunnerPair, RunnerState};
