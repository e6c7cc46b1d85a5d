//! Simulation core for two-runner travel problems.
//!
//! Three pure, synchronous building blocks used once per tick by the driver
//! in `travelsim-simulation`:
//!
//! ```text
//! prev RunnerPair ──► motion::advance (per runner) ──► next RunnerPair
//!        │                                                  │
//!        └──────────────► EventDetector::observe ◄──────────┘
//!                                  │
//!                                  ▼
//!                       Option<MeetingEvent>     HistoryRecorder::record
//! ```
//!
//! Nothing here performs I/O or can fail: inputs are assumed validated by
//! [`travelsim_types::SimulationConfig::validate`].

pub mod detector;
pub mod history;
pub mod motion;

pub use detector::{classify_crossing, sign_flipped, DetectorConfig, EventDetector};
pub use history::{HistoryRecorder, DEFAULT_HISTORY_CAPACITY};
pub use motion::advance;
