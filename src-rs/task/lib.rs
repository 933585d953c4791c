pub mod classify;
pub mod extract;
pub mod types;

pub use classify::TaskClassifier;
pub use extract::TaskExtractor;
pub use types::{ClassifiedTask, ExtractedTask, Priority, PriorityLevel, Responsibility, TaskCategory};
