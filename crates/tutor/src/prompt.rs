//! Prompt construction.
//!
//! The current slider values are injected into every prompt so the teacher
//! always answers about what is on screen right now, not about an earlier
//! configuration mentioned higher up in the chat.

use crate::transcript::ChatMessage;
use std::fmt::Write;
use travelsim_types::{ScenarioPolicy, SimulationConfig};

/// Persona and teaching rules sent as the system instruction.
pub const SYSTEM_INSTRUCTION: &str = "\
You are a humorous, friendly primary-school olympiad math teacher. Your student is a 10-year-old child.
Your job is to answer the student's questions using the [Current simulation] data provided.

Teaching principles:
1. Use the data: always quote the concrete numbers (speeds, distances, time).
2. Keep it simple: avoid algebra, prefer arithmetic thinking such as \"sum of speeds\" and \"difference of speeds\".
3. Make it lively: use emoji such as 🐰, 🐢, 🏁, ⏱️.
4. Be Socratic: when the student asks why, guide them to look at the chart or think it through instead of handing over a formula.
5. Be brief: keep each answer to about 100-150 words.";

/// Question asked by the "explain this scenario" button.
pub const EXPLAIN_QUESTION: &str =
    "Teacher, can you explain the motion in the current scenario and which math patterns I should notice?";

/// Snapshot of the simulation handed to the tutor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TutorContext {
    pub scenario: ScenarioPolicy,
    pub config: SimulationConfig,
    /// Simulated seconds elapsed.
    pub elapsed: f64,
}

impl TutorContext {
    /// Capture the current scenario, configuration and time.
    pub fn new(scenario: ScenarioPolicy, config: SimulationConfig, elapsed: f64) -> Self {
        Self {
            scenario,
            config,
            elapsed,
        }
    }

    /// The `[Current simulation]` block.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "[Current simulation]");
        let _ = writeln!(out, "Scenario: {}", scenario_description(self.scenario));
        let _ = writeln!(out, "Track length: {} m.", self.config.track_length);
        let _ = writeln!(out, "Red runner (rabbit) speed: {} m/s.", self.config.red_speed);
        let _ = writeln!(
            out,
            "Blue runner (tortoise) speed: {} m/s.",
            self.config.blue_speed
        );
        if self.scenario == ScenarioPolicy::LinearChase {
            let _ = writeln!(out, "Initial chase gap: {} m.", self.config.initial_gap);
        }
        let _ = writeln!(out, "Elapsed simulation time: {:.1} s.", self.elapsed);
        out
    }
}

/// Textbook description of a scenario.
pub fn scenario_description(scenario: ScenarioPolicy) -> &'static str {
    match scenario {
        ScenarioPolicy::LinearMeet => {
            "Classic meeting problem (straight track, starting face to face)."
        }
        ScenarioPolicy::LinearChase => {
            "Chase problem (straight track, same direction, red chases blue)."
        }
        ScenarioPolicy::RoundTrip => {
            "Repeated round-trip meetings (running back and forth between both ends)."
        }
        ScenarioPolicy::Circular => "Circular track problem (closed loop, lapping is possible).",
    }
}

/// A fully assembled request for the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorRequest {
    pub system_instruction: String,
    pub prompt: String,
}

/// Assemble the prompt for `question`.
///
/// `history` holds the earlier messages to include, oldest first; the
/// current question is not part of it.
pub fn build_request(
    question: &str,
    history: &[ChatMessage],
    context: &TutorContext,
) -> TutorRequest {
    let mut prompt = context.describe();

    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Earlier questions and your answers:");
    for message in history {
        let _ = writeln!(prompt, "{}: {}", message.role, message.text);
    }
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "The student now asks: \"{}\"", question);
    let _ = writeln!(prompt);
    let _ = write!(
        prompt,
        "Answer as the teacher (output the answer text only):"
    );

    TutorRequest {
        system_instruction: SYSTEM_INSTRUCTION.to_string(),
        prompt,
    }
}
