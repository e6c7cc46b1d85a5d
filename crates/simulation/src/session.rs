//! Interactive session: clock plus runner, driven by a refresh callback.

use crate::clock::{ClockConfig, FrameClock};
use crate::runner::SimulationRunner;
use crate::view::{Frame, Renderer};
use std::time::Duration;
use tracing::debug;
use travelsim_types::{MeetingEvent, ScenarioPolicy, SimulationConfig};

/// What the page holds: a [`SimulationRunner`] and the [`FrameClock`] that
/// feeds it.
///
/// Ticks are synchronous and happen only inside [`on_frame`](Self::on_frame),
/// so resets and scenario switches always land on a tick boundary.
#[derive(Debug, Clone)]
pub struct Session {
    runner: SimulationRunner,
    clock: FrameClock,
}

impl Session {
    /// Create a paused session.
    pub fn new(runner: SimulationRunner, clock: ClockConfig) -> Self {
        Self {
            runner,
            clock: FrameClock::new(clock),
        }
    }

    /// Handle one display refresh at wall-clock time `now`.
    ///
    /// Advances the simulation if playing and hands the committed frame to
    /// `renderer`. Returns the event recorded by the tick, if any.
    pub fn on_frame(
        &mut self,
        now: Duration,
        renderer: &mut impl Renderer,
    ) -> Option<MeetingEvent> {
        let event = self
            .clock
            .on_frame(now)
            .and_then(|dt| self.runner.advance(dt));
        renderer.render(&self.runner.frame());
        event
    }

    /// Start or pause playback. Returns whether the session is now playing.
    pub fn toggle_play(&mut self) -> bool {
        let playing = self.clock.toggle();
        debug!(playing, "Playback toggled");
        playing
    }

    /// Start playback.
    pub fn play(&mut self) {
        if !self.clock.is_running() {
            self.clock.start();
        }
    }

    /// Pause playback.
    pub fn pause(&mut self) {
        self.clock.pause();
    }

    /// Whether frames currently advance the simulation.
    pub fn is_playing(&self) -> bool {
        self.clock.is_running()
    }

    /// Stop playback and reset the run.
    pub fn reset(&mut self) {
        self.clock.pause();
        self.runner.reset();
    }

    /// Apply a new configuration. Stops playback and resets.
    pub fn set_config(&mut self, config: SimulationConfig) {
        self.clock.pause();
        self.runner.set_config(config);
    }

    /// Switch scenario. Stops playback and resets.
    pub fn set_scenario(&mut self, scenario: ScenarioPolicy) {
        self.clock.pause();
        self.runner.set_scenario(scenario);
    }

    /// The simulation runner.
    pub fn runner(&self) -> &SimulationRunner {
        &self.runner
    }

    /// The committed frame.
    pub fn frame(&self) -> Frame<'_> {
        self.runner.frame()
    }
}
