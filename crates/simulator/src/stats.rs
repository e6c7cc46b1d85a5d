//! Frame-delta statistics.

use hdrhistogram::{CreationError, Histogram};
use serde::Serialize;
use std::time::Duration;

/// Highest trackable frame delta: one hour, in microseconds.
const MAX_TRACKED_MICROS: u64 = 3_600_000_000;

/// Histogram of wall-clock deltas between consecutive frames.
#[derive(Debug, Clone)]
pub struct FrameStats {
    deltas: Histogram<u64>,
    max_delta: Duration,
    clamped: u64,
}

impl FrameStats {
    /// Create empty statistics. Deltas above `max_delta` count as clamped.
    pub fn new(max_delta: Duration) -> Result<Self, CreationError> {
        Ok(Self {
            deltas: Histogram::new_with_bounds(1, MAX_TRACKED_MICROS, 3)?,
            max_delta,
            clamped: 0,
        })
    }

    /// Record the delta between two frames.
    pub fn record(&mut self, delta: Duration) {
        if delta > self.max_delta {
            self.clamped += 1;
        }
        let micros = (delta.as_micros() as u64).max(1);
        self.deltas.saturating_record(micros);
    }

    /// Number of recorded deltas.
    pub fn count(&self) -> u64 {
        self.deltas.len()
    }

    /// Number of deltas that exceeded the clock's clamp.
    pub fn clamped(&self) -> u64 {
        self.clamped
    }

    /// Delta at quantile `q` in `[0, 1]`.
    pub fn quantile(&self, q: f64) -> Duration {
        Duration::from_micros(self.deltas.value_at_quantile(q))
    }

    /// Largest recorded delta.
    pub fn max(&self) -> Duration {
        Duration::from_micros(self.deltas.max())
    }

    /// Serializable snapshot.
    pub fn summary(&self) -> FrameStatsSummary {
        FrameStatsSummary {
            frames: self.count(),
            clamped: self.clamped,
            p50_ms: as_millis_f64(self.quantile(0.5)),
            p99_ms: as_millis_f64(self.quantile(0.99)),
            max_ms: as_millis_f64(self.max()),
        }
    }
}

/// Frame statistics as reported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameStatsSummary {
    pub frames: u64,
    pub clamped: u64,
    pub p50_ms: f64,
    pub p99_ms: f64,
    pub max_ms: f64,
}

fn as_millis_f64(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}
