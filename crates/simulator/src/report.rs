//! Run results.

use crate::stats::FrameStatsSummary;
use serde::Serialize;
use travelsim_types::{MeetingEvent, RunnerId, RunnerPair, ScenarioPolicy, SimulationConfig};

/// Outcome of one headless run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub scenario: ScenarioPolicy,
    pub config: SimulationConfig,
    /// Simulated seconds elapsed.
    pub elapsed: f64,
    pub ticks: u64,
    pub events: Vec<MeetingEvent>,
    /// Runner states at the end of the run.
    pub runners: RunnerPair,
    pub frames: FrameStatsSummary,
}

impl RunReport {
    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Print a human-readable summary to stdout.
    pub fn print(&self) {
        println!();
        println!("=== {} ===", self.scenario.label());
        println!(
            "Track {} m, red {} m/s, blue {} m/s{}",
            self.config.track_length,
            self.config.red_speed,
            self.config.blue_speed,
            if self.scenario == ScenarioPolicy::LinearChase {
                format!(", gap {} m", self.config.initial_gap)
            } else {
                String::new()
            }
        );
        println!("Simulated {:.2} s in {} ticks", self.elapsed, self.ticks);

        println!();
        if self.events.is_empty() {
            println!("No meetings.");
        } else {
            println!(
                "{:>3}  {:>8}  {:>9}  {:>6}  {:>9}  {:>9}",
                "#", "time (s)", "pos (m)", "kind", "red (m)", "blue (m)"
            );
            for (i, event) in self.events.iter().enumerate() {
                println!(
                    "{:>3}  {:>8.2}  {:>9.1}  {:>6}  {:>9.1}  {:>9.1}",
                    i + 1,
                    event.time,
                    event.position,
                    event.kind,
                    event.red_distance,
                    event.blue_distance
                );
            }
        }

        println!();
        for id in RunnerId::ALL {
            let state = self.runners.get(id);
            println!(
                "{:<4}  pos {:>7.1} m  dir {}  laps {}  distance {:.1} m",
                id, state.position, state.direction, state.laps, state.total_distance
            );
        }

        println!();
        println!(
            "Frames: {}  p50 {:.1} ms  p99 {:.1} ms  max {:.1} ms  clamped {}",
            self.frames.frames,
            self.frames.p50_ms,
            self.frames.p99_ms,
            self.frames.max_ms,
            self.frames.clamped
        );
    }
}
