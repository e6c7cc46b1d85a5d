//! Headless driver.

use crate::config::SimulatorConfig;
use crate::error::SimulatorError;
use crate::frames::FrameSchedule;
use crate::report::RunReport;
use crate::stats::FrameStats;
use std::time::Duration;
use tracing::info;
use travelsim_simulation::{NullRenderer, Renderer, Session};
use travelsim_types::MeetingEvent;

/// Drives a [`Session`] from a synthetic frame timeline.
///
/// Each generated timestamp goes through the session's frame clock exactly
/// as a display refresh would, so clamping, pausing and stalls behave as in
/// the interactive app.
pub struct Simulator {
    config: SimulatorConfig,
    session: Session,
    schedule: FrameSchedule,
    stats: FrameStats,
    last_frame: Option<Duration>,
}

impl Simulator {
    /// Create a simulator. Validates the configuration.
    pub fn new(config: SimulatorConfig) -> Result<Self, SimulatorError> {
        config.validate()?;
        let clock = config.clock_config();
        Ok(Self {
            session: Session::new(config.to_runner(), clock),
            schedule: FrameSchedule::new(config.frames),
            stats: FrameStats::new(clock.max_delta)?,
            last_frame: None,
            config,
        })
    }

    /// Run until the configured simulated duration without rendering.
    pub fn run(&mut self) -> RunReport {
        self.run_with(&mut NullRenderer)
    }

    /// Run until the configured simulated duration, handing every frame to
    /// `renderer`.
    pub fn run_with(&mut self, renderer: &mut impl Renderer) -> RunReport {
        info!(
            scenario = %self.config.scenario,
            duration_secs = self.config.duration_secs,
            fps = self.config.frames.fps,
            "Starting headless run"
        );

        self.session.play();
        while self.session.runner().elapsed() < self.config.duration_secs {
            self.step(renderer);
        }
        self.session.pause();

        let report = self.report();
        info!(
            elapsed = report.elapsed,
            ticks = report.ticks,
            events = report.events.len(),
            clamped = report.frames.clamped,
            "Run finished"
        );
        report
    }

    /// Deliver the next frame of the timeline.
    pub fn step(&mut self, renderer: &mut impl Renderer) -> Option<MeetingEvent> {
        let now = self.schedule.next()?;
        if let Some(previous) = self.last_frame {
            self.stats.record(now.saturating_sub(previous));
        }
        self.last_frame = Some(now);
        self.session.on_frame(now, renderer)
    }

    /// Snapshot of the run so far.
    pub fn report(&self) -> RunReport {
        let runner = self.session.runner();
        RunReport {
            scenario: runner.scenario(),
            config: *runner.config(),
            elapsed: runner.elapsed(),
            ticks: runner.ticks(),
            events: runner.events().to_vec(),
            runners: *runner.runners(),
            frames: self.stats.summary(),
        }
    }

    /// The driven session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Frame-delta statistics so far.
    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Wall-clock timestamp of the last delivered frame.
    pub fn wall_time(&self) -> Duration {
        self.last_frame.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frames::FrameConfig;
    use tracing_test::traced_test;
    use travelsim_simulation::Frame;
    use travelsim_types::{EventKind, ScenarioPolicy, SimulationConfig};

    const FRAME: f64 = 1.0 / 60.0;

    fn config(scenario: ScenarioPolicy, duration: f64) -> SimulatorConfig {
        SimulatorConfig::default()
            .with_scenario(scenario)
            .with_duration(Duration::from_secs_f64(duration))
    }

    #[derive(Default)]
    struct FrameCounter {
        frames: usize,
        last_elapsed: f64,
    }

    impl Renderer for FrameCounter {
        fn render(&mut self, frame: &Frame<'_>) {
            self.frames += 1;
            self.last_elapsed = frame.elapsed;
        }
    }

    #[traced_test]
    #[test]
    fn test_linear_meet_at_60_fps() {
        let mut sim = Simulator::new(config(ScenarioPolicy::LinearMeet, 40.0)).unwrap();
        let report = sim.run();

        assert!(report.elapsed >= 40.0);
        assert_eq!(report.events.len(), 1);
        let event = report.events[0];
        assert_eq!(event.kind, EventKind::Meet);
        assert!((event.time - 25.0).abs() <= FRAME + 1e-6);
        assert!((event.position - 250.0).abs() < 1.0);
        assert_eq!(report.frames.clamped, 0);
        assert!(logs_contain("Run finished"));
    }

    #[test]
    fn test_jittered_meet_fires_once() {
        for seed in 0..5 {
            let frames = FrameConfig::default().with_jitter(seed, 0.8);
            let mut sim =
                Simulator::new(config(ScenarioPolicy::LinearMeet, 40.0).with_frames(frames))
                    .unwrap();
            let report = sim.run();

            assert_eq!(report.events.len(), 1, "seed {}", seed);
            assert!((report.events[0].time - 25.0).abs() <= 1.8 * FRAME + 1e-6);
        }
    }

    #[test]
    fn test_stalls_are_clamped() {
        let frames = FrameConfig::default().with_stalls(120, Duration::from_secs(5));
        let mut sim =
            Simulator::new(config(ScenarioPolicy::RoundTrip, 10.0).with_frames(frames)).unwrap();
        let report = sim.run();

        assert!(report.frames.clamped >= 4);
        assert!(report.frames.max_ms > 5_000.0);
        // Each stall costs five wall seconds but only one clamped tick.
        assert!(sim.wall_time().as_secs_f64() > report.elapsed + 4.0 * 4.5);
        assert!(!sim.session().is_playing());
    }

    #[test]
    fn test_renderer_sees_every_frame() {
        let mut sim = Simulator::new(config(ScenarioPolicy::Circular, 1.0)).unwrap();
        let mut counter = FrameCounter::default();
        let report = sim.run_with(&mut counter);

        assert_eq!(counter.frames as u64, sim.stats().count() + 1);
        assert_eq!(counter.last_elapsed, report.elapsed);
        assert_eq!(report.ticks, sim.stats().count());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimulatorConfig::default()
            .with_simulation(SimulationConfig::default().with_red_speed(f64::NAN));
        assert!(Simulator::new(config).is_err());
    }

    #[test]
    fn test_report_json() {
        let mut sim = Simulator::new(config(ScenarioPolicy::LinearChase, 30.0)).unwrap();
        let json = sim.run().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["scenario"], "linear-chase");
        assert_eq!(value["events"].as_array().unwrap().len(), 1);
        assert!(value["frames"]["p50_ms"].as_f64().unwrap() > 16.0);
    }
}
