//! Scenario policies.
//!
//! A policy decides where the runners start and what happens when a runner
//! reaches a track boundary. Exactly one policy is active per run.

use crate::{Direction, RunnerId, RunnerState, SimulationConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four classic travel problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioPolicy {
    /// Opposite ends, facing each other, stopping at the far end.
    #[default]
    LinearMeet,
    /// Same start direction, blue given a head start, stopping at the far end.
    LinearChase,
    /// Opposite ends, bouncing back and forth between both ends.
    RoundTrip,
    /// Same start point on a closed loop, both running forward.
    Circular,
}

/// What a runner does on reaching the end of the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Stop at the boundary.
    Clamp,
    /// Reflect the overshoot and reverse direction.
    Reflect,
    /// Wrap to the start and count a lap.
    Wrap,
}

impl ScenarioPolicy {
    /// All policies, in menu order.
    pub const ALL: [ScenarioPolicy; 4] = [
        ScenarioPolicy::LinearMeet,
        ScenarioPolicy::LinearChase,
        ScenarioPolicy::RoundTrip,
        ScenarioPolicy::Circular,
    ];

    /// Boundary behavior for this policy.
    pub fn boundary(self) -> Boundary {
        match self {
            ScenarioPolicy::LinearMeet | ScenarioPolicy::LinearChase => Boundary::Clamp,
            ScenarioPolicy::RoundTrip => Boundary::Reflect,
            ScenarioPolicy::Circular => Boundary::Wrap,
        }
    }

    /// Whether the track is a closed loop.
    pub fn is_circular(self) -> bool {
        self.boundary() == Boundary::Wrap
    }

    /// Starting state of the given runner under this policy.
    pub fn initial_state(self, runner: RunnerId, config: &SimulationConfig) -> RunnerState {
        let (position, direction, speed) = match runner {
            RunnerId::Red => (0.0, Direction::Forward, config.red_speed),
            RunnerId::Blue => {
                let (position, direction) = match self {
                    ScenarioPolicy::LinearMeet | ScenarioPolicy::RoundTrip => {
                        (config.track_length, Direction::Backward)
                    }
                    ScenarioPolicy::LinearChase => (config.initial_gap, Direction::Forward),
                    ScenarioPolicy::Circular => (0.0, Direction::Forward),
                };
                (position, direction, config.blue_speed)
            }
        };
        RunnerState::new(runner, position, direction, speed)
    }

    /// Short human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            ScenarioPolicy::LinearMeet => "linear meeting",
            ScenarioPolicy::LinearChase => "linear chase",
            ScenarioPolicy::RoundTrip => "round trip",
            ScenarioPolicy::Circular => "circular track",
        }
    }
}

impl fmt::Display for ScenarioPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScenarioPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "meet" | "linear-meet" => Ok(ScenarioPolicy::LinearMeet),
            "chase" | "linear-chase" => Ok(ScenarioPolicy::LinearChase),
            "round-trip" | "roundtrip" | "bounce" => Ok(ScenarioPolicy::RoundTrip),
            "circular" | "circle" | "loop" => Ok(ScenarioPolicy::Circular),
            _ => Err(format!("Unknown scenario: {}", s)),
        }
    }
}
