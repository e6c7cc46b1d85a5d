//! Per-runner kinematic state.

use crate::{Direction, RunnerId};
use serde::{Deserialize, Serialize};

/// The state of one runner at a tick boundary.
///
/// Produced by the motion model once per tick and never mutated anywhere
/// else. `laps` only advances under the circular scenario;
/// `total_distance` never decreases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunnerState {
    /// Which runner this is.
    pub id: RunnerId,

    /// Position along the track coordinate.
    pub position: f64,

    /// Current heading.
    pub direction: Direction,

    /// Speed in m/s (non-negative).
    pub speed: f64,

    /// Completed laps (circular track only).
    pub laps: u32,

    /// Cumulative distance travelled since reset.
    pub total_distance: f64,
}

impl RunnerState {
    /// Create a runner at rest on the start line of its scenario.
    pub fn new(id: RunnerId, position: f64, direction: Direction, speed: f64) -> Self {
        Self {
            id,
            position,
            direction,
            speed,
            laps: 0,
            total_distance: 0.0,
        }
    }

    /// Distance along an unrolled circular track: `laps * track_length + position`.
    pub fn unrolled_position(&self, track_length: f64) -> f64 {
        self.laps as f64 * track_length + self.position
    }
}

/// Both runners at the same tick boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunnerPair {
    pub red: RunnerState,
    pub blue: RunnerState,
}

impl RunnerPair {
    /// Pair up the two runner states.
    pub fn new(red: RunnerState, blue: RunnerState) -> Self {
        Self { red, blue }
    }

    /// State of the given runner.
    pub fn get(&self, id: RunnerId) -> &RunnerState {
        match id {
            RunnerId::Red => &self.red,
            RunnerId::Blue => &self.blue,
        }
    }

    /// Signed separation `red.position - blue.position`.
    pub fn separation(&self) -> f64 {
        self.red.position - self.blue.position
    }

    /// Midpoint of the two positions.
    pub fn midpoint(&self) -> f64 {
        (self.red.position + self.blue.position) / 2.0
    }

    /// Whether both runners share a heading.
    pub fn same_direction(&self) -> bool {
        self.red.direction == self.blue.direction
    }
}
