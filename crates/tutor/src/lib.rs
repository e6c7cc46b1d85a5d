//! Math-teacher chat assistant.
//!
//! The tutor answers a child's questions about the running simulation. Each
//! question is sent together with a snapshot of the current scenario and
//! slider values plus a short window of the earlier conversation:
//!
//! ```text
//! TutorContext ──┐
//! Transcript ────┼──► build_request ──► TutorBackend::generate ──► reply
//! question ──────┘                          (timeout, fallback)
//! ```
//!
//! The tutor never mutates simulation state and a failed request never
//! surfaces as an error: the caller always gets a reply to show.

mod backend;
mod config;
mod error;
mod prompt;
mod transcript;
mod tutor;

pub use backend::{
    Candidate, Content, GeminiBackend, GenerateContentRequest, GenerateContentResponse, Part,
    TutorBackend,
};
pub use config::TutorConfig;
pub use error::TutorError;
pub use prompt::{
    build_request, scenario_description, TutorContext, TutorRequest, EXPLAIN_QUESTION,
    SYSTEM_INSTRUCTION,
};
pub use transcript::{ChatMessage, ChatRole, Transcript};
pub use tutor::{Tutor, NETWORK_FALLBACK, THINKING_FALLBACK};
