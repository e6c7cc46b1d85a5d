//! Position samples for the position-vs-time chart.

use serde::{Deserialize, Serialize};

/// One chart sample: both runners' positions at a point in simulated time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// Simulated time in seconds.
    pub time: f64,
    /// Red runner position.
    pub red: f64,
    /// Blue runner position.
    pub blue: f64,
}

impl HistoryPoint {
    /// Create a sample.
    pub fn new(time: f64, red: f64, blue: f64) -> Self {
        Self { time, red, blue }
    }
}
