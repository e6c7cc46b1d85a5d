//! Tutor configuration.

use serde::Deserialize;
use std::time::Duration;

/// Configuration for the tutor and its HTTP backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TutorConfig {
    /// Model identifier sent to the backend.
    pub model: String,

    /// Base URL of the generateContent-style API.
    pub endpoint: String,

    /// Environment variable holding the API key.
    pub api_key_env: String,

    /// Request timeout in milliseconds.
    pub timeout_ms: u64,

    /// Number of most recent chat messages included in each prompt.
    pub history_window: usize,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            timeout_ms: 30_000,
            history_window: 4,
        }
    }
}

impl TutorConfig {
    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API base URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = timeout.as_millis() as u64;
        self
    }

    /// Set how many recent messages go into each prompt.
    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }

    /// Request timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
