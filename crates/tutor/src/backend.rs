//! Language-model backends.

use crate::config::TutorConfig;
use crate::error::TutorError;
use crate::prompt::TutorRequest;
use serde::{Deserialize, Serialize};
use std::future::Future;
use tracing::debug;

/// Something that turns a prompt into free-text advice.
///
/// One request, one response. Implementations should not retry; the
/// [`Tutor`](crate::Tutor) applies the timeout and the fallback replies.
pub trait TutorBackend {
    /// Generate a reply for the request.
    fn generate(
        &self,
        request: &TutorRequest,
    ) -> impl Future<Output = Result<String, TutorError>> + Send;
}

/// Backend for the Gemini `generateContent` REST API.
#[derive(Debug, Clone)]
pub struct GeminiBackend {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiBackend {
    /// Create a backend reading the API key from the configured environment
    /// variable.
    pub fn from_env(config: &TutorConfig) -> Result<Self, TutorError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| TutorError::MissingApiKey(config.api_key_env.clone()))?;
        Ok(Self::with_api_key(config, api_key))
    }

    /// Create a backend with an explicit API key.
    pub fn with_api_key(config: &TutorConfig, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: api_key.into(),
        }
    }

    /// Full URL of the generateContent call.
    pub fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

impl TutorBackend for GeminiBackend {
    async fn generate(&self, request: &TutorRequest) -> Result<String, TutorError> {
        let body = GenerateContentRequest::from(request);
        debug!(model = %self.model, "Sending tutor request");

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TutorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        Ok(parsed.text())
    }
}

/// Request body of `generateContent`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
}

impl From<&TutorRequest> for GenerateContentRequest {
    fn from(request: &TutorRequest) -> Self {
        Self {
            system_instruction: Content::text(None, &request.system_instruction),
            contents: vec![Content::text(Some("user"), &request.prompt)],
        }
    }
}

/// A role-tagged list of parts.
#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }
}

/// One piece of content. Only text parts are used.
#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Response body of `generateContent`.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One generated candidate.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts concatenated. Empty if none.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}
