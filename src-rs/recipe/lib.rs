pub mod fallback;
pub mod jargon;
pub mod parser;
pub mod synth;
pub mod types;

pub use jargon::JargonGlossary;
pub use parser::{parse_recipe_blocks, RecipeBlock};
pub use synth::RecipeSynthesizer;
pub use types::{GeneratedAt, MealType, RecipeSet, RECIPE_TASK_CATEGORY};
