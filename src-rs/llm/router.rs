use std::collections::HashMap;
use std::sync::Arc;

use super::types::{CompletionClient, CompletionRequest, LLMResponse, ProviderError};

pub struct LLMRouter {
    default_provider: String,
    providers: HashMap<String, Arc<dyn CompletionClient>>,
}

impl LLMRouter {
    pub fn new(default_provider: &str) -> Self {
        Self {
            default_provider: default_provider.to_string(),
            providers: HashMap::new(),
        }
    }

    pub fn register_provider(&mut self, name: &str, adapter: Arc<dyn CompletionClient>) {
        self.providers.insert(name.to_string(), adapter);
    }

    pub fn has_provider(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    pub fn default_provider(&self) -> &str {
        &self.default_provider
    }
}

impl CompletionClient for LLMRouter {
    fn complete(&self, request: CompletionRequest) -> Result<LLMResponse, ProviderError> {
        let provider = request
            .provider
            .clone()
            .unwrap_or_else(|| self.default_provider.clone());
        let adapter = self.providers.get(&provider).ok_or_else(|| {
            ProviderError::new("provider_missing", &format!("provider not registered: {}", provider), false)
        })?;
        adapter.complete(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationParams;
    use crate::llm::FakeAdapter;

    #[test]
    fn routes_to_default_and_named_providers() {
        let mut router = LLMRouter::new("primary");
        router.register_provider("primary", Arc::new(FakeAdapter::with_default_response("from primary")));
        router.register_provider("backup", Arc::new(FakeAdapter::with_default_response("from backup")));

        let params = GenerationParams::new(0.2, 10);
        let resp = router.complete(CompletionRequest::prompt("hi", &params)).unwrap();
        assert_eq!(resp.content, "from primary");

        let req = CompletionRequest::prompt("hi", &params).with_route(Some("backup"), None);
        assert_eq!(router.complete(req).unwrap().content, "from backup");
    }

    #[test]
    fn unknown_provider_is_an_error() {
        let router = LLMRouter::new("missing");
        let err = router
            .complete(CompletionRequest::prompt("hi", &GenerationParams::new(0.2, 10)))
            .unwrap_err();
        assert_eq!(err.code, "provider_missing");
    }
}
