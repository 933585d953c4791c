use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::{json, Value};

use super::rotation::Rotator;
use super::types::{CompletionClient, CompletionRequest, LLMResponse, Message, ProviderError};

const GEMINI_DEFAULT_MODEL: &str = "gemini-2.0-flash";
const GEMINI_ALLOWED_MODELS: [&str; 4] = [
    "gemini-2.0-flash",
    "gemini-2.5-flash",
    "gemini-2.5-pro",
    "gemini-3-flash-preview",
];

pub struct GeminiConfig {
    pub api_keys: Vec<String>,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

pub struct GeminiAdapter {
    cfg: GeminiConfig,
    rotator: Rotator,
    client: Client,
}

impl GeminiAdapter {
    pub fn new(mut cfg: GeminiConfig) -> Result<Self, ProviderError> {
        if cfg.base_url.is_empty() {
            cfg.base_url = "https://generativelanguage.googleapis.com".to_string();
        }
        if cfg.model.is_empty() {
            cfg.model = GEMINI_DEFAULT_MODEL.to_string();
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

impl CompletionClient for GeminiAdapter {
    fn complete(&self, request: CompletionRequest) -> Result<LLMResponse, ProviderError> {
        let model = request
            .model
            .clone()
            .unwrap_or_else(|| self.cfg.model.clone());
        if !GEMINI_ALLOWED_MODELS.iter().any(|m| *m == model) {
            return Err(ProviderError::new(
                "invalid_model",
                &format!("model not allowed: {}", model),
                false,
            ));
        }
        // One key per call; rotation spreads load, it does not retry.
        let key = self
            .rotator
            .next()
            .ok_or_else(|| ProviderError::new("auth_error", "no Gemini API keys", false))?;
        let payload = build_payload(&request);
        send_request(&self.client, &self.cfg.base_url, &model, &key, &payload, request.timeout)
    }
}

fn build_payload(request: &CompletionRequest) -> Value {
    let mut contents = Vec::new();
    let mut system_instruction = None;

    for msg in &request.messages {
        if msg.role == "system" {
            system_instruction = Some(msg.content.clone());
            continue;
        }
        contents.push(content_entry(msg));
    }

    let mut generation = json!({});
    if let Some(temperature) = request.temperature {
        generation["temperature"] = json!(temperature);
    }
    if let Some(max_tokens) = request.max_tokens {
        generation["maxOutputTokens"] = json!(max_tokens);
    }

    let mut payload = json!({
        "contents": contents,
        "generationConfig": generation,
    });

    if let Some(system) = system_instruction {
        payload["systemInstruction"] = json!({
            "parts": [{"text": system}]
        });
    }

    payload
}

fn content_entry(msg: &Message) -> Value {
    let role = if msg.role == "user" { "user" } else { "model" };
    json!({
        "role": role,
        "parts": [{"text": msg.content}]
    })
}

fn send_request(
    client: &Client,
    base_url: &str,
    model: &str,
    api_key: &str,
    payload: &Value,
    timeout: Option<Duration>,
) -> Result<LLMResponse, ProviderError> {
    let endpoint = format!(
        "{}/v1beta/models/{}:generateContent",
        base_url.trim_end_matches('/'),
        model
    );
    let mut builder = client
        .post(endpoint)
        .header("Content-Type", "application/json")
        .header("x-goog-api-key", api_key)
        .json(payload);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    let resp = builder
        .send()
        .map_err(|err| ProviderError::from_transport(&err))?;

    let status = resp.status();
    let body = resp.text().unwrap_or_default();
    if !status.is_success() {
        return Err(ProviderError::from_status(status.as_u16(), &body));
    }

    let raw: Value = serde_json::from_str(&body)
        .map_err(|_| ProviderError::new("parse_error", "invalid json", false))?;
    let content = parse_response(&raw)
        .ok_or_else(|| ProviderError::new("parse_error", "no candidate text in response", false))?;
    Ok(LLMResponse {
        content,
        raw: Some(raw),
    })
}

fn parse_response(raw: &Value) -> Option<String> {
    let parts = raw
        .get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|v| v.as_str()))
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
