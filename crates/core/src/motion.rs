//! Motion model.
//!
//! Maps a runner's previous state and an elapsed-time increment to its next
//! state. The boundary rule comes from the active [`ScenarioPolicy`].
//!
//! # Preconditions
//!
//! - `speed >= 0`, `dt >= 0`, `track_length > 0`
//! - `speed * dt` well below `track_length` under [`Boundary::Wrap`]; only a
//!   single wrap per tick is accounted for. The frame clock's delta clamp is
//!   what keeps this true.

use travelsim_types::{Boundary, Direction, RunnerState, ScenarioPolicy};

/// Advance one runner by `dt` seconds.
pub fn advance(
    state: &RunnerState,
    speed: f64,
    dt: f64,
    track_length: f64,
    policy: ScenarioPolicy,
) -> RunnerState {
    let displacement = (speed * dt).abs();
    let mut next = RunnerState {
        speed,
        total_distance: state.total_distance + displacement,
        ..*state
    };

    match policy.boundary() {
        Boundary::Clamp => {
            let position = state.position + displacement * state.direction.sign();
            next.position = position.clamp(0.0, track_length);
        }
        Boundary::Reflect => {
            let mut position = state.position + displacement * state.direction.sign();
            if position < 0.0 {
                position = -position;
                next.direction = Direction::Forward;
            }
            if position > track_length {
                position = track_length - (position - track_length);
                next.direction = Direction::Backward;
            }
            next.position = position;
        }
        Boundary::Wrap => {
            let mut position = state.position + displacement;
            if position >= track_length {
                position -= track_length;
                next.laps += 1;
            }
            next.position = position;
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use travelsim_types::RunnerId;

    const TRACK: f64 = 400.0;

    fn runner(position: f64, direction: Direction) -> RunnerState {
        RunnerState::new(RunnerId::Red, position, direction, 10.0)
    }

    #[test]
    fn test_linear_moves_and_clamps() {
        let start = runner(390.0, Direction::Forward);
        let next = advance(&start, 10.0, 0.5, TRACK, ScenarioPolicy::LinearMeet);
        assert_eq!(next.position, 395.0);

        let next = advance(&next, 10.0, 1.0, TRACK, ScenarioPolicy::LinearMeet);
        assert_eq!(next.position, TRACK);
        assert_eq!(next.direction, Direction::Forward);

        let back = runner(3.0, Direction::Backward);
        let next = advance(&back, 6.0, 1.0, TRACK, ScenarioPolicy::LinearChase);
        assert_eq!(next.position, 0.0);
    }

    #[test]
    fn test_clamped_runner_still_accumulates_distance() {
        let parked = runner(TRACK, Direction::Forward);
        let next = advance(&parked, 10.0, 0.1, TRACK, ScenarioPolicy::LinearMeet);
        assert_eq!(next.position, TRACK);
        assert!((next.total_distance - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_round_trip_reflects_exact_overshoot() {
        let start = runner(398.0, Direction::Forward);
        let next = advance(&start, 10.0, 0.5, TRACK, ScenarioPolicy::RoundTrip);
        assert_eq!(next.position, 397.0);
        assert_eq!(next.direction, Direction::Backward);

        let start = runner(1.0, Direction::Backward);
        let next = advance(&start, 10.0, 0.3, TRACK, ScenarioPolicy::RoundTrip);
        assert!((next.position - 2.0).abs() < 1e-12);
        assert_eq!(next.direction, Direction::Forward);
        assert!((next.total_distance - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_circular_wraps_and_counts_lap() {
        let start = runner(399.0, Direction::Forward);
        let next = advance(&start, 10.0, 0.2, TRACK, ScenarioPolicy::Circular);
        assert!((next.position - 1.0).abs() < 1e-12);
        assert_eq!(next.laps, 1);

        let start = runner(390.0, Direction::Forward);
        let exact = advance(&start, 10.0, 1.0, TRACK, ScenarioPolicy::Circular);
        assert_eq!(exact.position, 0.0);
        assert_eq!(exact.laps, 1);
    }

    #[test]
    fn test_circular_ignores_direction() {
        let start = runner(10.0, Direction::Backward);
        let next = advance(&start, 10.0, 1.0, TRACK, ScenarioPolicy::Circular);
        assert_eq!(next.position, 20.0);
    }

    #[test]
    fn test_zero_dt_is_identity() {
        let start = runner(123.0, Direction::Backward);
        for policy in ScenarioPolicy::ALL {
            let next = advance(&start, 10.0, 0.0, TRACK, policy);
            assert_eq!(next.position, 123.0);
            assert_eq!(next.total_distance, 0.0);
        }
    }

    #[test]
    fn test_round_trip_stays_on_track_and_conserves_distance() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut state = runner(0.0, Direction::Forward);
        let mut expected = 0.0;

        for _ in 0..20_000 {
            let dt: f64 = rng.gen_range(0.0..0.1);
            let speed: f64 = rng.gen_range(1.0..20.0);
            let prev = state;
            state = advance(&state, speed, dt, TRACK, ScenarioPolicy::RoundTrip);
            expected += speed * dt;

            assert!((0.0..=TRACK).contains(&state.position));
            assert!(state.total_distance >= prev.total_distance);
        }

        assert!((state.total_distance - expected).abs() < 1e-6);
    }

    #[test]
    fn test_circular_laps_track_distance() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut state = runner(0.0, Direction::Forward);

        for _ in 0..20_000 {
            let dt: f64 = rng.gen_range(0.0..0.1);
            state = advance(&state, 10.0, dt, TRACK, ScenarioPolicy::Circular);

            assert!(state.position >= 0.0 && state.position < TRACK);
            assert!((state.unrolled_position(TRACK) - state.total_distance).abs() < 1e-6);
        }

        assert!(state.laps > 0);
    }
}
