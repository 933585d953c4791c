use serde::{Deserialize, Serialize};

pub const TIME_NOT_SPECIFIED: &str = "Not specified";

/// A task pulled out of free text. `time` is "HH:MM am/pm" or
/// [`TIME_NOT_SPECIFIED`]; `date` is always `YYYY-MM-DD`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedTask {
    pub task_name: String,
    pub time: String,
    pub date: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityLevel {
    #[serde(rename = "Low Priority")]
    Low,
    #[serde(rename = "Medium Priority")]
    Medium,
    #[serde(rename = "High Priority")]
    High,
}

impl PriorityLevel {
    /// Accepts "High Priority", "high", "HIGH PRIORITY." and similar.
    pub fn from_label(raw: &str) -> Option<Self> {
        let cleaned = clean_label(raw);
        let word = cleaned.strip_suffix(" priority").unwrap_or(&cleaned);
        match word {
            "low" => Some(PriorityLevel::Low),
            "medium" => Some(PriorityLevel::Medium),
            "high" => Some(PriorityLevel::High),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Priority {
    pub priority_level: PriorityLevel,
    pub priority_score: f64,
}

impl Priority {
    pub const MIN_SCORE: f64 = 1.0;
    pub const MAX_SCORE: f64 = 10.0;

    /// Scores outside `[1, 10]` are clamped; NaN is rejected.
    pub fn new(priority_level: PriorityLevel, priority_score: f64) -> Option<Self> {
        if priority_score.is_nan() {
            return None;
        }
        Some(Self {
            priority_level,
            priority_score: priority_score.clamp(Self::MIN_SCORE, Self::MAX_SCORE),
        })
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self {
            priority_level: PriorityLevel::Medium,
            priority_score: 5.0,
        }
    }
}

/// Who carries a task out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Responsibility {
    #[default]
    #[serde(rename = "Self")]
    Myself,
    Partner,
    Child,
}

impl Responsibility {
    pub fn from_label(raw: &str) -> Option<Self> {
        first_known_word(raw, |word| match word {
            "self" | "myself" | "me" => Some(Responsibility::Myself),
            "partner" => Some(Responsibility::Partner),
            "child" | "kid" => Some(Responsibility::Child),
            _ => None,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskCategory {
    #[default]
    #[serde(rename = "Normal task")]
    Normal,
    #[serde(rename = "Health task")]
    Health,
    #[serde(rename = "Recipy task")]
    Recipe,
}

impl TaskCategory {
    pub fn from_label(raw: &str) -> Option<Self> {
        first_known_word(raw, |word| match word {
            "normal" => Some(TaskCategory::Normal),
            "health" => Some(TaskCategory::Health),
            "recipe" | "recipy" => Some(TaskCategory::Recipe),
            _ => None,
        })
    }
}

/// An extracted task with all three classifier labels attached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedTask {
    #[serde(flatten)]
    pub task: ExtractedTask,
    #[serde(flatten)]
    pub priority: Priority,
    pub responsibility: Responsibility,
    pub category: TaskCategory,
}

fn clean_label(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c: char| !c.is_alphanumeric())
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Scans the words of a model answer in order and returns the first one the
/// matcher recognises. Handles both bare labels and short sentences.
fn first_known_word<T>(raw: &str, matcher: impl Fn(&str) -> Option<T>) -> Option<T> {
    raw.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .find_map(|word| matcher(&word.to_lowercase()))
}
