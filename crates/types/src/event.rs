//! Meeting and overtake events.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How two runners crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Head-on meeting: runners moving in opposite directions.
    #[serde(rename = "meet")]
    Meet,
    /// Chase or overtake: runners moving in the same direction.
    #[serde(rename = "chase")]
    Overtake,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Meet => write!(f, "meet"),
            EventKind::Overtake => write!(f, "chase"),
        }
    }
}

/// A detected crossing of the two runners.
///
/// The position is the midpoint of both runners after the detecting tick,
/// an approximation of the true crossing point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeetingEvent {
    /// Simulated time of the tick that detected the crossing, in seconds.
    pub time: f64,

    /// Midpoint of the two runners' positions.
    pub position: f64,

    /// Meeting or overtake.
    pub kind: EventKind,

    /// Red runner's cumulative distance at detection.
    pub red_distance: f64,

    /// Blue runner's cumulative distance at detection.
    pub blue_distance: f64,
}
