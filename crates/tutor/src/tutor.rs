//! The teacher the student chats with.

use crate::backend::TutorBackend;
use crate::config::TutorConfig;
use crate::error::TutorError;
use crate::prompt::{build_request, TutorContext, EXPLAIN_QUESTION};
use crate::transcript::{ChatMessage, ChatRole, Transcript};
use tracing::{info, warn};

/// Reply used when the backend answered with no text.
pub const THINKING_FALLBACK: &str =
    "The teacher is thinking about how to explain this more simply, one moment...";

/// Reply used when the backend failed or timed out.
pub const NETWORK_FALLBACK: &str =
    "The teacher's connection is a bit slow, please ask again!";

/// Chat façade over a [`TutorBackend`].
///
/// Always produces a reply for a non-blank question: backend failures are
/// logged and replaced by a fallback message. Nothing here touches the
/// simulation; the caller passes a [`TutorContext`] snapshot.
pub struct Tutor<B> {
    backend: B,
    config: TutorConfig,
    transcript: Transcript,
}

impl<B: TutorBackend> Tutor<B> {
    /// Create a tutor with an empty transcript.
    pub fn new(backend: B, config: TutorConfig) -> Self {
        Self {
            backend,
            config,
            transcript: Transcript::new(),
        }
    }

    /// Ask a question about the current simulation.
    ///
    /// Returns `None` for a blank question. Otherwise appends the question
    /// and the reply to the transcript and returns the reply.
    pub async fn ask(&mut self, question: &str, context: &TutorContext) -> Option<String> {
        let question = question.trim();
        if question.is_empty() {
            return None;
        }

        let request = build_request(
            question,
            self.transcript.recent(self.config.history_window),
            context,
        );
        self.transcript
            .push(ChatMessage::new(ChatRole::Student, question));

        let timeout = self.config.timeout();
        let result = match tokio::time::timeout(timeout, self.backend.generate(&request)).await {
            Ok(result) => result,
            Err(_) => Err(TutorError::Timeout(timeout)),
        };

        let reply = match result {
            Ok(text) if !text.trim().is_empty() => {
                info!(scenario = %context.scenario, chars = text.len(), "Tutor replied");
                text
            }
            Ok(_) => {
                warn!("Tutor returned an empty reply");
                THINKING_FALLBACK.to_string()
            }
            Err(error) => {
                warn!(%error, "Tutor request failed");
                NETWORK_FALLBACK.to_string()
            }
        };

        self.transcript
            .push(ChatMessage::new(ChatRole::Teacher, reply.clone()));
        Some(reply)
    }

    /// Ask the teacher to explain the current scenario.
    pub async fn explain(&mut self, context: &TutorContext) -> String {
        self.ask(EXPLAIN_QUESTION, context)
            .await
            .unwrap_or_else(|| NETWORK_FALLBACK.to_string())
    }

    /// Forget the conversation, e.g. after a scenario change.
    pub fn clear(&mut self) {
        self.transcript.clear();
    }

    /// The conversation so far.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The backend in use.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
