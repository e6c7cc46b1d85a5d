//! Error types for tutor requests.

use std::time::Duration;
use thiserror::Error;

/// Errors while asking the tutor backend.
///
/// None of these reach the student: [`Tutor`](crate::Tutor) turns them into
/// a fallback reply.
#[derive(Debug, Error)]
pub enum TutorError {
    /// No API key in the configured environment variable.
    #[error("API key not set (expected in ${0})")]
    MissingApiKey(String),

    /// Transport or decoding failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// No reply within the configured timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Any other backend-specific failure.
    #[error("Backend error: {0}")]
    Backend(String),
}
