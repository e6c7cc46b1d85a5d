//! Headless simulator for the travel-problem simulation.
//!
//! Replaces the browser's display refresh with a synthetic, optionally
//! jittered and stalling frame timeline and runs the interactive session
//! without any rendering:
//!
//! ```text
//! FrameSchedule ──timestamps──► Session (FrameClock ─dt─► SimulationRunner)
//!       │                                   │
//!       └──► FrameStats (hdrhistogram)      └──► RunReport (table / JSON)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use travelsim_simulator::{Simulator, SimulatorConfig};
//! use travelsim_types::ScenarioPolicy;
//!
//! let config = SimulatorConfig::default().with_scenario(ScenarioPolicy::RoundTrip);
//! let mut simulator = Simulator::new(config)?;
//! simulator.run().print();
//! # Ok::<(), travelsim_simulator::SimulatorError>(())
//! ```

mod config;
mod error;
mod frames;
mod report;
mod runner;
mod stats;

pub use config::SimulatorConfig;
pub use error::{ConfigFileError, SimulatorError};
pub use frames::{FrameConfig, FrameSchedule};
pub use report::RunReport;
pub use runner::Simulator;
pub use stats::{FrameStats, FrameStatsSummary};
