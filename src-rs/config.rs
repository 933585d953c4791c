use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::llm::{CompletionRequest, Message};

/// Sampling settings for one kind of completion call.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f64,
    pub max_tokens: u32,
}

impl GenerationParams {
    pub const fn new(temperature: f64, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PlannerConfig {
    pub provider: String,
    pub model: Option<String>,
    /// Deadline applied to every provider call. `None` leaves only the
    /// adapter's client-level timeout in place.
    pub timeout: Option<Duration>,
    pub extraction: GenerationParams,
    pub priority: GenerationParams,
    pub labels: GenerationParams,
    pub recipes: GenerationParams,
    pub reply: GenerationParams,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: None,
            timeout: Some(Duration::from_secs(60)),
            extraction: GenerationParams::new(0.1, 1024),
            priority: GenerationParams::new(0.2, 150),
            labels: GenerationParams::new(0.2, 100),
            recipes: GenerationParams::new(0.4, 1500),
            reply: GenerationParams::new(0.7, 300),
        }
    }
}

impl PlannerConfig {
    /// Build a single-prompt request routed and bounded by this config.
    pub fn request(&self, prompt: String, params: &GenerationParams) -> CompletionRequest {
        self.route(CompletionRequest::prompt(prompt, params))
    }

    pub fn request_with(&self, messages: Vec<Message>, params: &GenerationParams) -> CompletionRequest {
        self.route(CompletionRequest::new(messages, params))
    }

    fn route(&self, request: CompletionRequest) -> CompletionRequest {
        request
            .with_route(Some(&self.provider), self.model.as_deref())
            .with_timeout(self.timeout)
    }
}
