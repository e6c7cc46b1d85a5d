//! Tick orchestration.

use crate::view::Frame;
use tracing::{debug, info, trace};
use travelsim_core::{advance, DetectorConfig, EventDetector, HistoryRecorder};
use travelsim_types::{
    HistoryPoint, MeetingEvent, RunnerId, RunnerPair, RunnerState, ScenarioPolicy,
    SimulationConfig,
};

/// Owns the authoritative simulation clock and all per-run state.
///
/// One call to [`advance`](Self::advance) is one tick: both runners move,
/// the detector inspects the before/after pair, a history sample is
/// appended and elapsed time grows by `dt`. Every mutating method takes
/// `&mut self`, so a renderer holding a [`Frame`] can never observe a
/// partially applied tick or a half-finished reset.
#[derive(Debug, Clone)]
pub struct SimulationRunner {
    config: SimulationConfig,
    scenario: ScenarioPolicy,
    detector: EventDetector,
    runners: RunnerPair,
    elapsed: f64,
    ticks: u64,
    history: HistoryRecorder,
    events: Vec<MeetingEvent>,
}

impl SimulationRunner {
    /// Create a runner in its reset state.
    ///
    /// `config` must already have passed [`SimulationConfig::validate`].
    pub fn new(config: SimulationConfig, scenario: ScenarioPolicy) -> Self {
        let mut runner = Self {
            config,
            scenario,
            detector: EventDetector::default(),
            runners: initial_runners(scenario, &config),
            elapsed: 0.0,
            ticks: 0,
            history: HistoryRecorder::new(),
            events: Vec::new(),
        };
        runner.reset();
        runner
    }

    /// Use custom detector tuning. Resets the run.
    pub fn with_detector_config(mut self, detector: DetectorConfig) -> Self {
        self.detector = EventDetector::new(detector);
        self.reset();
        self
    }

    /// Use a custom history capacity. Resets the run.
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history = HistoryRecorder::with_capacity(capacity);
        self.reset();
        self
    }

    /// Reinitialize the run under the current configuration and scenario.
    ///
    /// Afterwards elapsed time is zero, the event log is empty and the
    /// history holds exactly one sample at `t = 0`.
    pub fn reset(&mut self) {
        self.runners = initial_runners(self.scenario, &self.config);
        self.elapsed = 0.0;
        self.ticks = 0;
        self.events.clear();
        self.detector.reset();
        self.history.clear();
        self.history.record(HistoryPoint::new(
            0.0,
            self.runners.red.position,
            self.runners.blue.position,
        ));

        debug!(
            scenario = %self.scenario,
            track_length = self.config.track_length,
            red_speed = self.config.red_speed,
            blue_speed = self.config.blue_speed,
            "Simulation reset"
        );
    }

    /// Replace the configuration and reset.
    pub fn set_config(&mut self, config: SimulationConfig) {
        self.config = config;
        self.reset();
    }

    /// Switch scenario and reset.
    pub fn set_scenario(&mut self, scenario: ScenarioPolicy) {
        self.scenario = scenario;
        self.reset();
    }

    /// Replace configuration and scenario together, with a single reset.
    pub fn replace(&mut self, config: SimulationConfig, scenario: ScenarioPolicy) {
        self.config = config;
        self.scenario = scenario;
        self.reset();
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// The caller bounds `dt` (see [`FrameClock`](crate::FrameClock)); a
    /// negative or non-finite `dt` is treated as zero. Returns the event
    /// recorded by this tick, if any.
    pub fn advance(&mut self, dt: f64) -> Option<MeetingEvent> {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        let prev = self.runners;
        let track_length = self.config.track_length;
        let next = RunnerPair::new(
            advance(
                &prev.red,
                self.config.red_speed,
                dt,
                track_length,
                self.scenario,
            ),
            advance(
                &prev.blue,
                self.config.blue_speed,
                dt,
                track_length,
                self.scenario,
            ),
        );
        let now = self.elapsed + dt;

        let event = self
            .detector
            .observe(now, &prev, &next, track_length, self.scenario);

        self.runners = next;
        self.elapsed = now;
        self.ticks += 1;
        self.history
            .record(HistoryPoint::new(now, next.red.position, next.blue.position));

        trace!(
            t = now,
            red = next.red.position,
            blue = next.blue.position,
            "Tick"
        );

        if let Some(event) = event {
            info!(
                t = event.time,
                position = event.position,
                kind = %event.kind,
                red_distance = event.red_distance,
                blue_distance = event.blue_distance,
                "Runners crossed"
            );
            self.events.push(event);
        }

        event
    }

    /// Simulated seconds since the last reset.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Ticks since the last reset.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Both runner states.
    pub fn runners(&self) -> &RunnerPair {
        &self.runners
    }

    /// State of one runner.
    pub fn runner(&self, id: RunnerId) -> &RunnerState {
        self.runners.get(id)
    }

    /// Active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Active scenario.
    pub fn scenario(&self) -> ScenarioPolicy {
        self.scenario
    }

    /// Bounded chart history.
    pub fn history(&self) -> &HistoryRecorder {
        &self.history
    }

    /// Every event recorded since the last reset, oldest first.
    pub fn events(&self) -> &[MeetingEvent] {
        &self.events
    }

    /// Read-only view of the committed state for renderers.
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            elapsed: self.elapsed,
            runners: &self.runners,
            track_length: self.config.track_length,
            scenario: self.scenario,
            history: &self.history,
            events: &self.events,
        }
    }
}

fn initial_runners(scenario: ScenarioPolicy, config: &SimulationConfig) -> RunnerPair {
    RunnerPair::new(
        scenario.initial_state(RunnerId::Red, config),
        scenario.initial_state(RunnerId::Blue, config),
    )
}
