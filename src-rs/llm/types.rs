use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config::GenerationParams;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LLMResponse {
    pub content: String,
    pub raw: Option<Value>,
}

/// One completion call. `timeout` is the caller's deadline for the whole
/// provider round trip; adapters abandon the request once it elapses.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub messages: Vec<Message>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    pub model: Option<String>,
    pub provider: Option<String>,
    pub timeout: Option<Duration>,
}

impl CompletionRequest {
    pub fn new(messages: Vec<Message>, params: &GenerationParams) -> Self {
        Self {
            messages,
            temperature: Some(params.temperature),
            max_tokens: Some(params.max_tokens),
            model: None,
            provider: None,
            timeout: None,
        }
    }

    /// Single user-turn request, the shape every pipeline prompt uses.
    pub fn prompt(prompt: impl Into<String>, params: &GenerationParams) -> Self {
        Self::new(vec![Message::user(prompt)], params)
    }

    pub fn with_route(mut self, provider: Option<&str>, model: Option<&str>) -> Self {
        self.provider = provider.map(str::to_string);
        self.model = model.map(str::to_string);
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Clone, Debug, Error)]
#[error("{code}: {message}")]
pub struct ProviderError {
    pub code: String,
    pub message: String,
    pub retryable: bool,
}

impl ProviderError {
    pub fn new(code: &str, message: &str, retryable: bool) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            retryable,
        }
    }

    /// Maps a transport failure from reqwest onto a provider error code.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new("timeout", &err.to_string(), true)
        } else {
            Self::new("network_error", &err.to_string(), true)
        }
    }

    /// Classifies a non-success HTTP response.
    pub fn from_status(status: u16, body: &str) -> Self {
        let lowered = body.to_lowercase();
        match status {
            401 | 403 => Self::new("auth_error", body, false),
            429 => Self::new("rate_limit", body, true),
            _ if lowered.contains("quota") || lowered.contains("resource_exhausted") => {
                Self::new("rate_limit", body, true)
            }
            500..=599 => Self::new("server_error", body, true),
            _ => Self::new("api_error", body, false),
        }
    }
}

/// The sole boundary to a hosted completion provider.
///
/// Implementations are shared across requests behind an `Arc` and must not
/// keep per-call state.
pub trait CompletionClient: Send + Sync {
    fn complete(&self, request: CompletionRequest) -> Result<LLMResponse, ProviderError>;
}
