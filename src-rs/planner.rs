use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::config::PlannerConfig;
use crate::llm::CompletionClient;
use crate::recipe::{RecipeSet, RecipeSynthesizer};
use crate::result::PipelineResult;
use crate::task::{
    ClassifiedTask, ExtractedTask, Priority, Responsibility, TaskCategory, TaskClassifier,
    TaskExtractor,
};

/// Composes the pipeline components around one injected completion client.
///
/// Holds no per-request state; share it behind an `Arc`.
pub struct Planner {
    pub config: PlannerConfig,
    client: Arc<dyn CompletionClient>,
    extractor: TaskExtractor,
    classifier: TaskClassifier,
    recipes: RecipeSynthesizer,
}

impl Planner {
    pub fn new(config: PlannerConfig, client: Arc<dyn CompletionClient>) -> Self {
        Self {
            extractor: TaskExtractor::new(client.clone(), config.clone()),
            classifier: TaskClassifier::new(client.clone(), config.clone()),
            recipes: RecipeSynthesizer::new(client.clone(), config.clone()),
            client,
            config,
        }
    }

    pub fn extract_tasks(&self, text: &str, now: NaiveDateTime) -> Vec<ExtractedTask> {
        self.extractor.extract(text, now)
    }

    pub fn try_extract_tasks(
        &self,
        text: &str,
        now: NaiveDateTime,
    ) -> PipelineResult<Vec<ExtractedTask>> {
        self.extractor.try_extract(text, now)
    }

    /// Extract tasks, then label each one with all three classifiers.
    pub fn plan_tasks(&self, text: &str, now: NaiveDateTime) -> Vec<ClassifiedTask> {
        self.extractor
            .extract(text, now)
            .into_iter()
            .map(|task| self.classifier.classify(task))
            .collect()
    }

    pub fn classify_priority(&self, task: &str) -> Priority {
        self.classifier.classify_priority(task)
    }

    pub fn classify_responsibility(&self, task: &str) -> Responsibility {
        self.classifier.classify_responsibility(task)
    }

    pub fn classify_category(&self, task: &str) -> TaskCategory {
        self.classifier.classify_category(task)
    }

    pub fn suggest_recipes(
        &self,
        available_items: &str,
        conversation: Option<&str>,
        now: NaiveDateTime,
    ) -> RecipeSet {
        self.recipes.generate_at(available_items, conversation, now)
    }

    /// Free-form assistant reply to a message. Unlike the pipeline steps this
    /// has no fallback text, so the error is returned as is.
    pub fn reply(&self, text: &str) -> PipelineResult<String> {
        let request = self.config.request(text.to_string(), &self.config.reply);
        let response = self.client.complete(request)?;
        Ok(response.content.trim().to_string())
    }
}
