//! Runner identity and heading types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two runners a state belongs to.
///
/// Red is always the faster-by-default "rabbit" starting at position 0;
/// blue is the "tortoise" whose start depends on the scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunnerId {
    Red,
    Blue,
}

impl RunnerId {
    /// Both runners, in display order.
    pub const ALL: [RunnerId; 2] = [RunnerId::Red, RunnerId::Blue];
}

impl fmt::Display for RunnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunnerId::Red => write!(f, "red"),
            RunnerId::Blue => write!(f, "blue"),
        }
    }
}

/// Signed heading along the track coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Towards increasing position (+1).
    #[default]
    Forward,
    /// Towards decreasing position (-1).
    Backward,
}

impl Direction {
    /// The sign applied to displacement: +1.0 or -1.0.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "+1"),
            Direction::Backward => write!(f, "-1"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Forward.sign(), 1.0);
        assert_eq!(Direction::Backward.sign(), -1.0);
        assert_eq!(Direction::Backward.to_string(), "-1");
    }

    #[test]
    fn test_runner_display() {
        assert_eq!(RunnerId::ALL, [RunnerId::Red, RunnerId::Blue]);
        assert_eq!(RunnerId::Red.to_string(), "red");
        assert_eq!(RunnerId::Blue.to_string(), "blue");
    }
}
