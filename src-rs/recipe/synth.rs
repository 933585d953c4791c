use std::sync::Arc;

use chrono::{Local, NaiveDateTime};

use super::fallback::fallback_recipes;
use super::jargon::JargonGlossary;
use super::parser::{parse_recipe_blocks, RecipeBlock};
use super::types::{GeneratedAt, MealType, RecipeSet, RECIPE_TASK_CATEGORY};
use crate::config::PlannerConfig;
use crate::llm::{CompletionClient, Message};
use crate::prompt::{build_recipe_prompt, RECIPE_SYSTEM_PROMPT};
use crate::result::{PipelineError, PipelineResult};

pub const MODEL_ITEMS_NEEDED: &str = "Cooking oil, salt, black pepper, water, onions";

const FILLER_NAME: &str = "Mixed Ingredient Dish";
const FILLER_BODY: &str = "Cook the available ingredients together with seasonings until tender.";

/// Produces exactly three recipes for an ingredient list.
pub struct RecipeSynthesizer {
    client: Arc<dyn CompletionClient>,
    config: PlannerConfig,
    glossary: JargonGlossary,
}

impl RecipeSynthesizer {
    pub fn new(client: Arc<dyn CompletionClient>, config: PlannerConfig) -> Self {
        Self {
            client,
            config,
            glossary: JargonGlossary::new(),
        }
    }

    pub fn generate(&self, available_items: &str, conversation: Option<&str>) -> RecipeSet {
        self.generate_at(available_items, conversation, Local::now().naive_local())
    }

    /// Never fails: a provider error or a response with no usable recipe
    /// block switches to the rule-based templates.
    pub fn generate_at(
        &self,
        available_items: &str,
        conversation: Option<&str>,
        now: NaiveDateTime,
    ) -> RecipeSet {
        let meal_type = MealType::detect(conversation.unwrap_or(""));
        match self.synthesize(available_items, meal_type, now) {
            Ok(set) => set,
            Err(err) => {
                tracing::warn!(error = %err, "recipe synthesis failed, using fallback recipes");
                fallback_recipes(available_items, meal_type, now)
            }
        }
    }

    /// Model path only; surfaces the error instead of falling back.
    pub fn try_generate_at(
        &self,
        available_items: &str,
        conversation: Option<&str>,
        now: NaiveDateTime,
    ) -> PipelineResult<RecipeSet> {
        let meal_type = MealType::detect(conversation.unwrap_or(""));
        self.synthesize(available_items, meal_type, now)
    }

    fn synthesize(
        &self,
        available_items: &str,
        meal_type: MealType,
        now: NaiveDateTime,
    ) -> PipelineResult<RecipeSet> {
        let messages = vec![
            Message::system(RECIPE_SYSTEM_PROMPT),
            Message::user(build_recipe_prompt(available_items, meal_type.label())),
        ];
        let response = self
            .client
            .complete(self.config.request_with(messages, &self.config.recipes))?;

        let blocks = parse_recipe_blocks(&response.content);
        if blocks.is_empty() {
            return Err(PipelineError::parse("no recipe blocks in response"));
        }
        tracing::debug!(blocks = blocks.len(), "parsed recipe blocks");
        Ok(self.assemble(blocks, available_items, meal_type, now))
    }

    /// Annotate, pad and truncate parsed blocks into a recipe set.
    ///
    /// Bodies are renumbered by position; names keep the model's marker.
    /// Missing positions get a numbered filler dish.
    pub fn assemble(
        &self,
        blocks: Vec<RecipeBlock>,
        available_items: &str,
        meal_type: MealType,
        now: NaiveDateTime,
    ) -> RecipeSet {
        let entries: [(String, String); 3] = std::array::from_fn(|i| {
            let n = i + 1;
            match blocks.get(i) {
                Some(block) => (
                    block.name.clone(),
                    format!("Recipe {}: {}", n, self.glossary.annotate(&block.body)),
                ),
                None => (
                    format!("Recipe {}: {}", n, FILLER_NAME),
                    format!("Recipe {}: {}", n, self.glossary.annotate(FILLER_BODY)),
                ),
            }
        });
        let [(n1, b1), (n2, b2), (n3, b3)] = entries;

        RecipeSet {
            meal_type,
            category: RECIPE_TASK_CATEGORY.to_string(),
            generated_at: GeneratedAt::from_datetime(now),
            items_available: available_items.to_string(),
            items_needed: MODEL_ITEMS_NEEDED.to_string(),
            names: [n1, n2, n3],
            bodies: [b1, b2, b3],
        }
    }
}
