pub mod fake_adapter;
pub mod gemini_adapter;
pub mod openai_adapter;
pub mod rotation;
pub mod router;
pub mod types;

pub use fake_adapter::FakeAdapter;
pub use gemini_adapter::{GeminiAdapter, GeminiConfig};
pub use openai_adapter::{OpenAIAdapter, OpenAIConfig};
pub use rotation::Rotator;
pub use router::LLMRouter;
pub use types::{CompletionClient, CompletionRequest, LLMResponse, Message, ProviderError};
