//! Turns free-form household text into schedulable tasks and recipe
//! suggestions through a hosted completion provider, degrading to
//! deterministic defaults whenever the provider fails.

pub mod config;
pub mod helpers;
pub mod planner;
pub mod prompt;
pub mod result;
pub mod text;

#[path = "llm/lib.rs"]
pub mod llm;
#[path = "task/lib.rs"]
pub mod task;
#[path = "recipe/lib.rs"]
pub mod recipe;
#[path = "api/lib.rs"]
pub mod api;

pub use config::{GenerationParams, PlannerConfig};
pub use planner::Planner;
pub use result::{PipelineError, PipelineResult};
