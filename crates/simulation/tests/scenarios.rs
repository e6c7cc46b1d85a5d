//! End-to-end scenario checks against the closed-form answers.

use travelsim_test_helpers::{
    assert_close, classic_config, classic_runner, run_fixed, run_jittered, FRAME_60HZ,
};
use travelsim_simulation::SimulationRunner;
use travelsim_types::{EventKind, RunnerId, ScenarioPolicy};

// ==================================================================================
// Linear scenarios
// ==================================================================================

#[test]
fn linear_meet_at_sum_of_speeds() {
    let mut sim = classic_runner(ScenarioPolicy::LinearMeet);
    let events = run_fixed(&mut sim, FRAME_60HZ, 60.0);

    // 400 / (10 + 6) = 25 s, red has run 10 * 25 = 250 m.
    assert_eq!(events.len(), 1);
    let meet = events[0];
    assert_eq!(meet.kind, EventKind::Meet);
    assert_close(meet.time, 25.0, 0.02);
    assert_close(meet.position, 250.0, 0.2);
    assert_close(meet.red_distance, 250.0, 0.2);
    assert_close(meet.blue_distance, 150.0, 0.2);
}

#[test]
fn linear_meet_runners_stop_at_the_far_end() {
    let mut sim = classic_runner(ScenarioPolicy::LinearMeet);
    run_fixed(&mut sim, FRAME_60HZ, 80.0);

    assert_eq!(sim.runner(RunnerId::Red).position, 400.0);
    assert_eq!(sim.runner(RunnerId::Blue).position, 0.0);
}

#[test]
fn linear_chase_at_difference_of_speeds() {
    let mut sim = classic_runner(ScenarioPolicy::LinearChase);
    let events = run_fixed(&mut sim, FRAME_60HZ, 45.0);

    // 100 / (10 - 6) = 25 s.
    assert_eq!(events.len(), 1);
    let catch_up = events[0];
    assert_eq!(catch_up.kind, EventKind::Overtake);
    assert_close(catch_up.time, 25.0, 0.02);
    assert_close(catch_up.position, 250.0, 0.2);
}

#[test]
fn linear_chase_blue_reaching_parked_red_counts() {
    let mut sim = classic_runner(ScenarioPolicy::LinearChase);
    let events = run_fixed(&mut sim, FRAME_60HZ, 55.0);

    // Red parks at 400 m at t = 40; blue arrives at t = 50.
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].kind, EventKind::Overtake);
    assert_close(events[1].time, 50.0, 0.02);
    assert_eq!(events[1].position, 400.0);
}

// ==================================================================================
// Round trip
// ==================================================================================

#[test]
fn round_trip_repeated_meetings() {
    let mut sim = classic_runner(ScenarioPolicy::RoundTrip);
    let events = run_fixed(&mut sim, FRAME_60HZ, 110.0);

    // Meetings every 2L of combined distance after the first L: 25 s, 75 s.
    // Red catches blue from behind at 100 s after bouncing off the start.
    assert_eq!(events.len(), 3);

    assert_eq!(events[0].kind, EventKind::Meet);
    assert_close(events[0].time, 25.0, 0.02);
    assert_close(events[0].position, 250.0, 0.2);

    assert_eq!(events[1].kind, EventKind::Meet);
    assert_close(events[1].time, 75.0, 0.02);
    assert_close(events[1].position, 50.0, 0.2);

    assert_eq!(events[2].kind, EventKind::Overtake);
    assert_close(events[2].time, 100.0, 0.02);
    assert_close(events[2].position, 200.0, 0.2);
}

#[test]
fn round_trip_stays_on_track() {
    let mut sim = classic_runner(ScenarioPolicy::RoundTrip);
    for _ in 0..30_000 {
        sim.advance(FRAME_60HZ);
        for id in RunnerId::ALL {
            let position = sim.runner(id).position;
            assert!((0.0..=400.0).contains(&position), "{} at {}", id, position);
        }
    }
    assert_close(sim.runner(RunnerId::Red).total_distance, 10.0 * sim.elapsed(), 1e-6);
}

// ==================================================================================
// Circular track
// ==================================================================================

#[test]
fn circular_first_overtake_after_one_lap_gap() {
    let mut sim = classic_runner(ScenarioPolicy::Circular);

    // Red wraps at t = 40 without passing anyone.
    let early = run_fixed(&mut sim, FRAME_60HZ, 40.5);
    assert!(early.is_empty());
    assert_eq!(sim.runner(RunnerId::Red).laps, 1);
    assert_eq!(sim.runner(RunnerId::Blue).laps, 0);

    // 400 / (10 - 6) = 100 s.
    let events = run_fixed(&mut sim, FRAME_60HZ, 105.0);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, EventKind::Overtake);
    assert_close(events[0].time, 100.0, 0.02);
    assert_close(events[0].position, 200.0, 0.2);
}

#[test]
fn circular_laps_and_position_bounds() {
    let mut sim = classic_runner(ScenarioPolicy::Circular);
    run_fixed(&mut sim, 0.1, 250.0);

    let red = sim.runner(RunnerId::Red);
    assert!(red.position >= 0.0 && red.position < 400.0);
    assert_eq!(red.laps, 6);
    assert_close(red.unrolled_position(400.0), red.total_distance, 1e-6);
}

#[test]
fn circular_overtakes_repeat_under_jitter() {
    // 400 / (10 - 7) s between overtakes, none of them on the start line.
    let config = classic_config().with_blue_speed(7.0);
    let mut sim = SimulationRunner::new(config, ScenarioPolicy::Circular);
    let events = run_jittered(&mut sim, 7, 0.004, 0.1, 300.0);

    assert_eq!(events.len(), 2);
    for (i, event) in events.iter().enumerate() {
        assert_eq!(event.kind, EventKind::Overtake);
        assert_close(event.time, 400.0 / 3.0 * (i + 1) as f64, 0.1);
    }
}

// ==================================================================================
// Cross-cutting properties
// ==================================================================================

#[test]
fn jittered_linear_meet_fires_once() {
    for seed in 0..8 {
        let mut sim = classic_runner(ScenarioPolicy::LinearMeet);
        let events = run_jittered(&mut sim, seed, 0.004, 0.05, 40.0);
        assert_eq!(events.len(), 1, "seed {}", seed);
        assert_close(events[0].time, 25.0, 0.05);
    }
}

#[test]
fn events_respect_debounce_window() {
    for scenario in ScenarioPolicy::ALL {
        let mut sim = classic_runner(scenario);
        run_jittered(&mut sim, 99, 0.001, 0.1, 600.0);

        let times: Vec<f64> = sim.events().iter().map(|e| e.time).collect();
        assert!(
            times.windows(2).all(|w| w[1] - w[0] >= 1.0),
            "{}: {:?}",
            scenario,
            times
        );
    }
}

#[test]
fn cumulative_distance_is_speed_times_time() {
    for scenario in ScenarioPolicy::ALL {
        let mut sim = classic_runner(scenario);
        let mut last = [0.0; 2];
        for _ in 0..5_000 {
            sim.advance(0.037);
            for (i, id) in RunnerId::ALL.into_iter().enumerate() {
                let distance = sim.runner(id).total_distance;
                assert!(distance >= last[i]);
                last[i] = distance;
            }
        }
        let config = classic_config();
        assert_close(last[0], config.red_speed * sim.elapsed(), 1e-6);
        assert_close(last[1], config.blue_speed * sim.elapsed(), 1e-6);
    }
}

#[test]
fn reset_is_total() {
    for scenario in ScenarioPolicy::ALL {
        let mut sim = classic_runner(scenario);
        run_fixed(&mut sim, 0.1, 120.0);
        sim.reset();

        assert_eq!(sim.elapsed(), 0.0);
        assert!(sim.events().is_empty());
        assert_eq!(sim.history().len(), 1);
        assert_eq!(sim.history().latest().map(|p| p.time), Some(0.0));
        assert_eq!(sim.runner(RunnerId::Red).laps, 0);
    }
}

#[test]
fn history_is_bounded_and_ordered() {
    let mut sim = classic_runner(ScenarioPolicy::RoundTrip);
    run_fixed(&mut sim, FRAME_60HZ, 60.0);

    assert_eq!(sim.history().len(), 1000);
    let times: Vec<f64> = sim.history().iter().map(|p| p.time).collect();
    assert!(times.windows(2).all(|w| w[0] <= w[1]));
    assert_close(*times.last().unwrap(), sim.elapsed(), 1e-12);
}
