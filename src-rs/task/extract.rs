use std::collections::HashSet;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value;

use super::types::{ExtractedTask, TIME_NOT_SPECIFIED};
use crate::config::PlannerConfig;
use crate::llm::CompletionClient;
use crate::prompt::{build_extraction_prompt, DATE_FORMAT};
use crate::result::{PipelineError, PipelineResult};
use crate::text::{fold, strip_code_fence};

/// One array element as the model wrote it, before normalization.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawTask {
    pub task_name: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Turns free text into a deduplicated, date-normalized task list.
pub struct TaskExtractor {
    client: Arc<dyn CompletionClient>,
    config: PlannerConfig,
}

impl TaskExtractor {
    pub fn new(client: Arc<dyn CompletionClient>, config: PlannerConfig) -> Self {
        Self { client, config }
    }

    /// Total form of [`try_extract`](Self::try_extract): any failure yields an
    /// empty list.
    pub fn extract(&self, text: &str, now: NaiveDateTime) -> Vec<ExtractedTask> {
        match self.try_extract(text, now) {
            Ok(tasks) => tasks,
            Err(err) => {
                tracing::warn!(error = %err, "task extraction failed, returning no tasks");
                Vec::new()
            }
        }
    }

    /// `Ok(vec![])` means the model found nothing actionable; `Err` means the
    /// call or the parse failed.
    pub fn try_extract(&self, text: &str, now: NaiveDateTime) -> PipelineResult<Vec<ExtractedTask>> {
        let today = now.date();
        let tomorrow = today.succ_opt().unwrap_or(today);
        let prompt = build_extraction_prompt(text, today, tomorrow);
        tracing::debug!(chars = prompt.len(), "sending task extraction prompt");

        let response = self
            .client
            .complete(self.config.request(prompt, &self.config.extraction))?;
        let raw = parse_task_array(&response.content)?;
        let tasks = normalize_tasks(raw, today, tomorrow);
        tracing::debug!(count = tasks.len(), "extracted tasks");
        Ok(tasks)
    }
}

/// Parse the completion as a JSON array of task objects.
///
/// A non-array body is an error. Elements that are not task objects are
/// skipped individually so one malformed entry does not sink the rest.
pub fn parse_task_array(content: &str) -> PipelineResult<Vec<RawTask>> {
    let body = strip_code_fence(content);
    let value: Value = serde_json::from_str(body)?;
    let Value::Array(items) = value else {
        return Err(PipelineError::parse("expected a JSON array of tasks"));
    };

    let mut tasks = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<RawTask>(item) {
            Ok(task) => tasks.push(task),
            Err(err) => tracing::debug!(error = %err, "skipping malformed task entry"),
        }
    }
    Ok(tasks)
}

/// Apply date overrides, deduplicate and drop single-word entries.
///
/// A "tomorrow" or "today" in the name or date replaces the date with the
/// literal anchor date; a missing date becomes `today`. Entries collapse on
/// `(name, time, date)` compared case- and whitespace-insensitively; the
/// first occurrence is kept in its original position.
pub fn normalize_tasks(raw: Vec<RawTask>, today: NaiveDate, tomorrow: NaiveDate) -> Vec<ExtractedTask> {
    let today_str = today.format(DATE_FORMAT).to_string();
    let tomorrow_str = tomorrow.format(DATE_FORMAT).to_string();

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for task in raw {
        let name = task.task_name.trim();
        if name.split_whitespace().count() < 2 {
            continue;
        }

        let stated_date = task.date.as_deref().map(str::trim).unwrap_or("");
        let name_lower = name.to_lowercase();
        let date_lower = stated_date.to_lowercase();
        let date = if name_lower.contains("tomorrow") || date_lower.contains("tomorrow") {
            tomorrow_str.clone()
        } else if name_lower.contains("today") || date_lower.contains("today") {
            today_str.clone()
        } else if stated_date.is_empty() {
            today_str.clone()
        } else {
            stated_date.to_string()
        };

        let time = match task.time.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => TIME_NOT_SPECIFIED.to_string(),
        };

        if seen.insert((fold(name), fold(&time), date.clone())) {
            out.push(ExtractedTask {
                task_name: name.to_string(),
                time,
                date,
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, time: Option<&str>, date: Option<&str>) -> RawTask {
        RawTask {
            task_name: name.to_string(),
            time: time.map(str::to_string),
            date: date.map(str::to_string),
        }
    }

    fn anchors() -> (NaiveDate, NaiveDate) {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        (today, today.succ_opt().unwrap())
    }

    #[test]
    fn duplicates_collapse_keeping_first_casing() {
        let (today, tomorrow) = anchors();
        let tasks = normalize_tasks(
            vec![
                raw("Pick up  Groceries", Some("05:00 PM"), Some("2025-03-04")),
                raw("pick up groceries", Some("05:00 pm"), Some("2025-03-04")),
                raw("pick up groceries", Some("06:00 pm"), Some("2025-03-04")),
            ],
            today,
            tomorrow,
        );
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].task_name, "Pick up  Groceries");
        assert_eq!(tasks[0].time, "05:00 PM");
        assert_eq!(tasks[1].time, "06:00 pm");
    }

    #[test]
    fn single_word_names_are_dropped() {
        let (today, tomorrow) = anchors();
        let tasks = normalize_tasks(
            vec![raw("Laundry", None, None), raw("  Walk dog ", None, None)],
            today,
            tomorrow,
        );
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].task_name, "Walk dog");
    }

    #[test]
    fn relative_words_override_model_dates() {
        let (today, tomorrow) = anchors();
        let tasks = normalize_tasks(
            vec![
                raw("Call plumber tomorrow", Some("10:00 am"), Some("2025-12-25")),
                raw("Water plants", None, Some("Today")),
                raw("Pay rent", None, None),
                raw("Book dentist", None, Some("2025-03-09")),
            ],
            today,
            tomorrow,
        );
        let dates: Vec<&str> = tasks.iter().map(|t| t.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-03-02", "2025-03-01", "2025-03-01", "2025-03-09"]);
        assert_eq!(tasks[1].time, TIME_NOT_SPECIFIED);
    }

    #[test]
    fn parse_accepts_fenced_arrays_and_skips_bad_entries() {
        let content = "```json\n[{\"task_name\": \"Feed cat\", \"time\": \"08:00 am\", \"date\": \"2025-03-01\"}, 42, {\"time\": \"x\"}]\n```";
        let tasks = parse_task_array(content).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].task_name, "Feed cat");
    }

    #[test]
    fn parse_rejects_non_arrays() {
        assert!(matches!(parse_task_array("{\"task_name\": \"a b\"}"), Err(PipelineError::Parse(_))));
        assert!(matches!(parse_task_array("Sure! Here are your tasks"), Err(PipelineError::Parse(_))));
    }
}
