//! Offline completion client.
//!
//! Answers with canned text chosen by substring match on the prompt, so the
//! pipeline can run without network access. With nothing registered every
//! call fails, which drives each operation onto its fallback path.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::types::{CompletionClient, CompletionRequest, LLMResponse, ProviderError};

#[derive(Debug, Default)]
pub struct FakeAdapter {
    /// Checked in registration order; the first matching needle wins.
    responses: Vec<(String, String)>,
    default_response: Option<String>,
    calls: AtomicUsize,
}

impl FakeAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        Self::new().and_response(prompt_contains, response)
    }

    pub fn with_default_response(response: &str) -> Self {
        Self {
            default_response: Some(response.to_string()),
            ..Self::default()
        }
    }

    pub fn and_response(mut self, prompt_contains: &str, response: &str) -> Self {
        self.responses
            .push((prompt_contains.to_string(), response.to_string()));
        self
    }

    /// Number of completion calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CompletionClient for FakeAdapter {
    fn complete(&self, request: CompletionRequest) -> Result<LLMResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let prompt: String = request
            .messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let matched = self
            .responses
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, response)| response.clone())
            .or_else(|| self.default_response.clone());

        match matched {
            Some(content) => Ok(LLMResponse { content, raw: None }),
            None => Err(ProviderError::new(
                "network_error",
                "offline: no canned response for prompt",
                true,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationParams;

    fn ask(adapter: &FakeAdapter, prompt: &str) -> Result<LLMResponse, ProviderError> {
        adapter.complete(CompletionRequest::prompt(prompt, &GenerationParams::new(0.0, 1)))
    }

    #[test]
    fn first_registered_match_wins() {
        let adapter = FakeAdapter::with_response("priority", "A").and_response("prio", "B");
        assert_eq!(ask(&adapter, "task priority please").unwrap().content, "A");
        assert_eq!(adapter.calls(), 1);
    }

    #[test]
    fn unmatched_prompt_without_default_fails() {
        let adapter = FakeAdapter::with_response("recipes", "x");
        assert!(ask(&adapter, "something else").is_err());
        let adapter = FakeAdapter::with_default_response("fallback");
        assert_eq!(ask(&adapter, "anything").unwrap().content, "fallback");
    }
}
