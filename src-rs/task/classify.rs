use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use super::types::{ClassifiedTask, ExtractedTask, Priority, PriorityLevel, Responsibility, TaskCategory};
use crate::config::{GenerationParams, PlannerConfig};
use crate::llm::CompletionClient;
use crate::prompt::{build_category_prompt, build_priority_prompt, build_responsibility_prompt};
use crate::result::{PipelineError, PipelineResult};
use crate::text::strip_code_fence;

#[derive(Debug, Deserialize)]
struct RawPriority {
    priority_level: String,
    priority_score: Value,
}

/// Three independent single-shot classifiers over a task description.
///
/// The plain methods never fail: on any provider or parse error they return
/// the neutral label (`Medium`/5.0, `Self`, `Normal`).
pub struct TaskClassifier {
    client: Arc<dyn CompletionClient>,
    config: PlannerConfig,
}

impl TaskClassifier {
    pub fn new(client: Arc<dyn CompletionClient>, config: PlannerConfig) -> Self {
        Self { client, config }
    }

    pub fn classify_priority(&self, task: &str) -> Priority {
        self.try_classify_priority(task).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "priority classification failed, using default");
            Priority::default()
        })
    }

    pub fn classify_responsibility(&self, task: &str) -> Responsibility {
        self.try_classify_responsibility(task).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "responsibility classification failed, using default");
            Responsibility::default()
        })
    }

    pub fn classify_category(&self, task: &str) -> TaskCategory {
        self.try_classify_category(task).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "category classification failed, using default");
            TaskCategory::default()
        })
    }

    /// Runs all three classifiers over the task name.
    pub fn classify(&self, task: ExtractedTask) -> ClassifiedTask {
        let priority = self.classify_priority(&task.task_name);
        let responsibility = self.classify_responsibility(&task.task_name);
        let category = self.classify_category(&task.task_name);
        ClassifiedTask {
            task,
            priority,
            responsibility,
            category,
        }
    }

    pub fn try_classify_priority(&self, task: &str) -> PipelineResult<Priority> {
        let content = self.ask(build_priority_prompt(task), &self.config.priority)?;
        parse_priority(&content)
    }

    pub fn try_classify_responsibility(&self, task: &str) -> PipelineResult<Responsibility> {
        let content = self.ask(build_responsibility_prompt(task), &self.config.labels)?;
        Responsibility::from_label(&content)
            .ok_or_else(|| PipelineError::parse(format!("unknown responsibility: {}", content.trim())))
    }

    pub fn try_classify_category(&self, task: &str) -> PipelineResult<TaskCategory> {
        let content = self.ask(build_category_prompt(task), &self.config.labels)?;
        TaskCategory::from_label(&content)
            .ok_or_else(|| PipelineError::parse(format!("unknown category: {}", content.trim())))
    }

    fn ask(&self, prompt: String, params: &GenerationParams) -> PipelineResult<String> {
        let response = self.client.complete(self.config.request(prompt, params))?;
        Ok(response.content)
    }
}

/// Parse `{"priority_level": ..., "priority_score": ...}`, tolerating a code
/// fence, prose around the object, and a score given as a numeric string.
pub fn parse_priority(content: &str) -> PipelineResult<Priority> {
    let body = strip_code_fence(content);
    let object = match (body.find('{'), body.rfind('}')) {
        (Some(start), Some(end)) if start < end => &body[start..=end],
        _ => return Err(PipelineError::parse("no JSON object in priority response")),
    };
    let raw: RawPriority = serde_json::from_str(object)?;

    let level = PriorityLevel::from_label(&raw.priority_level)
        .ok_or_else(|| PipelineError::parse(format!("unknown priority level: {}", raw.priority_level)))?;
    let score = match &raw.priority_score {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| PipelineError::parse("priority_score is not a number"))?;

    Priority::new(level, score).ok_or_else(|| PipelineError::parse("priority_score is not a number"))
}
