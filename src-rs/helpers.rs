use std::env;
use std::sync::Arc;
use std::time::Duration;

use crate::config::PlannerConfig;
use crate::llm::{GeminiAdapter, GeminiConfig, LLMRouter, OpenAIAdapter, OpenAIConfig};

const CLIENT_TIMEOUT_SECS: u64 = 60;

fn load_keys_from_env(primary: &str, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Ok(raw) = env::var(primary) {
        for item in raw.split(',') {
            let trimmed = item.trim();
            if !trimmed.is_empty() {
                keys.push(trimmed.to_string());
            }
        }
    }
    for idx in 2..=10 {
        let key = format!("{}_{}", prefix, idx);
        if let Ok(value) = env::var(&key) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                keys.push(trimmed.to_string());
            }
        }
    }
    keys
}

pub fn load_openai_keys() -> Vec<String> {
    load_keys_from_env("OPENAI_API_KEY", "OPENAI_API_KEY")
}

pub fn load_gemini_keys() -> Vec<String> {
    load_keys_from_env("GEMINI_API_KEY", "GEMINI_API_KEY")
}

fn env_opt(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => None,
    }
}

/// Planner settings from `HOMEPLAN_*` variables over the defaults.
/// `HOMEPLAN_TIMEOUT_SECS=0` disables the per-call deadline.
pub fn load_config_from_env() -> PlannerConfig {
    let mut cfg = PlannerConfig::default();
    if let Some(provider) = env_opt("HOMEPLAN_PROVIDER") {
        cfg.provider = provider;
    }
    cfg.model = env_opt("HOMEPLAN_MODEL");
    if let Some(secs) = env_opt("HOMEPLAN_TIMEOUT_SECS").and_then(|raw| raw.parse::<u64>().ok()) {
        cfg.timeout = if secs == 0 {
            None
        } else {
            Some(Duration::from_secs(secs))
        };
    }
    cfg
}

/// Register every provider that has keys. Fails when the configured default
/// provider has none.
pub fn build_llm_router(cfg: &PlannerConfig) -> Result<LLMRouter, String> {
    let mut router = LLMRouter::new(&cfg.provider);
    let client_timeout = cfg
        .timeout
        .unwrap_or(Duration::from_secs(CLIENT_TIMEOUT_SECS));

    let openai_keys = load_openai_keys();
    if !openai_keys.is_empty() {
        let adapter = OpenAIAdapter::new(OpenAIConfig {
            api_keys: openai_keys,
            base_url: env_opt("OPENAI_BASE_URL").unwrap_or_default(),
            model: String::new(),
            timeout: client_timeout,
        })
        .map_err(|err| err.to_string())?;
        router.register_provider("openai", Arc::new(adapter));
    } else if cfg.provider == "openai" {
        return Err("openai provider selected but no OPENAI_API_KEY found".to_string());
    }

    let gemini_keys = load_gemini_keys();
    if !gemini_keys.is_empty() {
        let adapter = GeminiAdapter::new(GeminiConfig {
            api_keys: gemini_keys,
            base_url: env_opt("GEMINI_BASE_URL").unwrap_or_default(),
            model: String::new(),
            timeout: client_timeout,
        })
        .map_err(|err| err.to_string())?;
        router.register_provider("gemini", Arc::new(adapter));
    } else if cfg.provider == "gemini" {
        return Err("gemini provider selected but no GEMINI_API_KEY found".to_string());
    }

    if !router.has_provider(&cfg.provider) {
        return Err(format!("unknown provider: {}", cfg.provider));
    }
    Ok(router)
}

/// [`build_llm_router`] for async callers. The blocking HTTP clients must be
/// built off the runtime's worker threads, so construction runs on the
/// blocking pool.
pub async fn spawn_llm_router(cfg: &PlannerConfig) -> Result<LLMRouter, String> {
    let cfg = cfg.clone();
    tokio::task::spawn_blocking(move || build_llm_router(&cfg))
        .await
        .map_err(|err| format!("router construction panicked: {}", err))?
}
