use thiserror::Error;

use crate::llm::ProviderError;

/// Why a pipeline step produced no model-derived result.
///
/// Public `try_*` operations return this so callers can tell "nothing found"
/// apart from "the call failed"; the total operations log it and degrade.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),
    #[error("parse error: {0}")]
    Parse(String),
}

impl PipelineError {
    pub fn parse(message: impl Into<String>) -> Self {
        PipelineError::Parse(message.into())
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(err: serde_json::Error) -> Self {
        PipelineError::Parse(err.to_string())
    }
}

pub type PipelineResult<T> = Result<T, PipelineError>;
