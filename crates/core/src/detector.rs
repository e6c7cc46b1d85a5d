//! Meeting and overtake detection.
//!
//! A crossing is a sign change of the relative position `red - blue` between
//! two consecutive ticks. Sampling at a finite tick rate makes the raw sign
//! test unreliable in three ways, each handled here:
//!
//! - **Wrap-around**: on a closed track a runner jumping from near the end
//!   back to 0 flips the sign without passing anyone. Ticks where either
//!   runner moved more than half a track are rejected.
//! - **Late detection**: the flip is only seen on the tick after the true
//!   crossing, so the runners may already be apart. A generous proximity
//!   window accepts the flip as long as they are still close.
//! - **Jitter**: the relative position can hover around zero for several
//!   ticks. A debounce window drops candidates too close to the last event.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use travelsim_types::{EventKind, MeetingEvent, RunnerPair, ScenarioPolicy};

/// Tuning for the detector heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Maximum separation after the tick, as a fraction of the track length,
    /// for a sign flip to count as an event.
    pub proximity_fraction: f64,

    /// Minimum simulated seconds between two recorded events.
    pub debounce: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            proximity_fraction: 0.2,
            debounce: 1.0,
        }
    }
}

impl DetectorConfig {
    /// Set the proximity window fraction.
    pub fn with_proximity_fraction(mut self, fraction: f64) -> Self {
        self.proximity_fraction = fraction;
        self
    }

    /// Set the debounce window in seconds.
    pub fn with_debounce(mut self, debounce: f64) -> Self {
        self.debounce = debounce;
        self
    }
}

/// Whether the relative position crossed zero between two samples.
///
/// Leaving a shared point (`prev == 0`) is not a crossing; arriving exactly on
/// the other runner (`next == 0`) is.
pub fn sign_flipped(prev: f64, next: f64) -> bool {
    if prev == 0.0 {
        return false;
    }
    next == 0.0 || (prev > 0.0) != (next > 0.0)
}

/// Classify the crossing between two tick boundaries, if any.
///
/// Applies the sign test and the circular wrap guard but neither the
/// proximity gate nor the debounce.
pub fn classify_crossing(
    prev: &RunnerPair,
    next: &RunnerPair,
    track_length: f64,
    policy: ScenarioPolicy,
) -> Option<EventKind> {
    if policy.is_circular() {
        let half = track_length / 2.0;
        let red_jump = (next.red.position - prev.red.position).abs();
        let blue_jump = (next.blue.position - prev.blue.position).abs();
        if red_jump > half || blue_jump > half {
            trace!(red_jump, blue_jump, "Wrap-around tick, skipping crossing test");
            return None;
        }
        return sign_flipped(prev.separation(), next.separation())
            .then_some(EventKind::Overtake);
    }

    if !sign_flipped(prev.separation(), next.separation()) {
        return None;
    }

    if next.same_direction() {
        Some(EventKind::Overtake)
    } else {
        Some(EventKind::Meet)
    }
}

/// Stateful detector holding the debounce history of one run.
#[derive(Debug, Clone, Default)]
pub struct EventDetector {
    config: DetectorConfig,
    last_event_time: Option<f64>,
}

impl EventDetector {
    /// Create a detector with the given tuning.
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            config,
            last_event_time: None,
        }
    }

    /// The detector's tuning.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Time of the last recorded event, if any.
    pub fn last_event_time(&self) -> Option<f64> {
        self.last_event_time
    }

    /// Forget the debounce history.
    pub fn reset(&mut self) {
        self.last_event_time = None;
    }

    /// Inspect one tick and return the event it produced, if any.
    ///
    /// `time` is the simulated time at the end of the tick. A returned event
    /// is considered recorded and starts a new debounce window.
    pub fn observe(
        &mut self,
        time: f64,
        prev: &RunnerPair,
        next: &RunnerPair,
        track_length: f64,
        policy: ScenarioPolicy,
    ) -> Option<MeetingEvent> {
        let kind = classify_crossing(prev, next, track_length, policy)?;

        let separation = next.separation().abs();
        let window = track_length * self.config.proximity_fraction;
        if separation >= window {
            trace!(separation, window, "Crossing outside proximity window");
            return None;
        }

        if let Some(last) = self.last_event_time {
            if time - last < self.config.debounce {
                debug!(time, last, %kind, "Debounced duplicate crossing");
                return None;
            }
        }

        self.last_event_time = Some(time);
        Some(MeetingEvent {
            time,
            position: next.midpoint(),
            kind,
            red_distance: next.red.total_distance,
            blue_distance: next.blue.total_distance,
        })
    }
}
