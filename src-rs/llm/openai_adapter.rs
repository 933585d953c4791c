use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::rotation::Rotator;
use super::types::{CompletionClient, CompletionRequest, LLMResponse, Message, ProviderError};

const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com";
const OPENAI_DEFAULT_MODEL: &str = "gpt-4";

pub struct OpenAIConfig {
    pub api_keys: Vec<String>,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

/// Adapter for OpenAI-compatible `/v1/chat/completions` endpoints.
pub struct OpenAIAdapter {
    cfg: OpenAIConfig,
    rotator: Rotator,
    client: Client,
}

impl OpenAIAdapter {
    pub fn new(mut cfg: OpenAIConfig) -> Result<Self, ProviderError> {
        if cfg.base_url.is_empty() {
            cfg.base_url = OPENAI_DEFAULT_BASE_URL.to_string();
        }
        if cfg.model.is_empty() {
            cfg.model = OPENAI_DEFAULT_MODEL.to_string();
        }
        let client = Client::builder()
            .timeout(cfg.timeout)
            .build()
            .map_err(|err| ProviderError::new("network_error", &format!("http client: {}", err), false))?;
        Ok(Self {
            rotator: Rotator::new(cfg.api_keys.clone()),
            cfg,
            client,
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: String,
    messages: &'a [Message],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl CompletionClient for OpenAIAdapter {
    fn complete(&self, request: CompletionRequest) -> Result<LLMResponse, ProviderError> {
        let key = self
            .rotator
            .next()
            .ok_or_else(|| ProviderError::new("auth_error", "no OpenAI API keys", false))?;
        let body = ChatRequest {
            model: request.model.clone().unwrap_or_else(|| self.cfg.model.clone()),
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let endpoint = format!("{}/v1/chat/completions", self.cfg.base_url.trim_end_matches('/'));
        let mut builder = self
            .client
            .post(endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", key))
            .json(&body);
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }
        let resp = builder
            .send()
            .map_err(|err| ProviderError::from_transport(&err))?;

        let status = resp.status();
        let text = resp.text().unwrap_or_default();
        if !status.is_success() {
            return Err(ProviderError::from_status(status.as_u16(), &text));
        }
        parse_body(&text)
    }
}

fn parse_body(text: &str) -> Result<LLMResponse, ProviderError> {
    let raw: Value = serde_json::from_str(text)
        .map_err(|_| ProviderError::new("parse_error", "invalid json", false))?;
    let parsed: ChatResponse = serde_json::from_value(raw.clone())
        .map_err(|err| ProviderError::new("parse_error", &err.to_string(), false))?;
    let content = parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| ProviderError::new("parse_error", "no choices in response", false))?;
    Ok(LLMResponse {
        content,
        raw: Some(raw),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_choice_content() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"Self"}}]}"#;
        let resp = parse_body(body).unwrap();
        assert_eq!(resp.content, "Self");
        assert!(resp.raw.is_some());
    }

    #[test]
    fn empty_choices_is_a_parse_error() {
        let err = parse_body(r#"{"choices":[]}"#).unwrap_err();
        assert_eq!(err.code, "parse_error");
        assert_eq!(parse_body("<html>").unwrap_err().code, "parse_error");
    }

    #[test]
    fn missing_keys_fail_without_network() {
        let adapter = OpenAIAdapter::new(OpenAIConfig {
            api_keys: Vec::new(),
            base_url: String::new(),
            model: String::new(),
            timeout: Duration::from_secs(1),
        })
        .unwrap();
        let req = CompletionRequest::prompt("hi", &crate::config::GenerationParams::new(0.1, 5));
        assert_eq!(adapter.complete(req).unwrap_err().code, "auth_error");
    }
}
