pub use crate::config::PlannerConfig;
pub use crate::planner::Planner;
pub use crate::recipe::RecipeSet;
pub use crate::task::{ClassifiedTask, ExtractedTask};

pub mod handlers;
pub mod server;
