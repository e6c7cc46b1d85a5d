//! Shared fixtures for travelsim tests.
//!
//! The classic textbook setup used throughout: a 400 m track, red at
//! 10 m/s, blue at 6 m/s, and a 100 m head start for the chase.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use travelsim_simulation::SimulationRunner;
use travelsim_types::{MeetingEvent, ScenarioPolicy, SimulationConfig};

/// Frame step of a 60 Hz display.
pub const FRAME_60HZ: f64 = 1.0 / 60.0;

/// The classic 400 m / 10 m/s / 6 m/s / 100 m configuration.
pub fn classic_config() -> SimulationConfig {
    SimulationConfig {
        track_length: 400.0,
        red_speed: 10.0,
        blue_speed: 6.0,
        initial_gap: 100.0,
    }
}

/// A runner over the classic configuration.
pub fn classic_runner(scenario: ScenarioPolicy) -> SimulationRunner {
    SimulationRunner::new(classic_config(), scenario)
}

/// Advance in fixed steps until `until` simulated seconds have elapsed.
///
/// Returns the events recorded along the way.
pub fn run_fixed(runner: &mut SimulationRunner, step: f64, until: f64) -> Vec<MeetingEvent> {
    let mut events = Vec::new();
    while runner.elapsed() < until {
        if let Some(event) = runner.advance(step) {
            events.push(event);
        }
    }
    events
}

/// Advance with frame deltas drawn uniformly from `[min_step, max_step)`.
///
/// Deterministic for a given seed. Returns the events recorded.
pub fn run_jittered(
    runner: &mut SimulationRunner,
    seed: u64,
    min_step: f64,
    max_step: f64,
    until: f64,
) -> Vec<MeetingEvent> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut events = Vec::new();
    while runner.elapsed() < until {
        let step = rng.gen_range(min_step..max_step);
        if let Some(event) = runner.advance(step) {
            events.push(event);
        }
    }
    events
}

/// Assert `actual` is within `tolerance` of `expected`.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} ± {}, got {}",
        expected,
        tolerance,
        actual
    );
}
