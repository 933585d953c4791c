use serde::{Deserialize, Serialize};

#[derive(Clone, Debug)]
pub struct CLIConfig {
    pub base_url: String,
    pub debug: bool,
    pub token: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct HistoryEntry {
    pub command: String,
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ClassifyRequest {
    pub task: String,
}

#[derive(Debug, Serialize)]
pub struct RecipeRequest {
    pub items: String,
    pub conversation: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TaskInfo {
    pub task_name: String,
    pub time: String,
    pub date: String,
    pub priority_level: Option<String>,
    pub priority_score: Option<f64>,
    pub responsibility: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TasksResponse {
    #[serde(default)]
    pub success: Option<bool>,
    pub tasks: Vec<TaskInfo>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyResponse {
    pub priority_level: String,
    pub priority_score: f64,
    pub responsibility: String,
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct RecipeResponse {
    pub meal_type: String,
    pub time: String,
    pub date: String,
    pub items_available: String,
    pub items_needed: String,
    pub recipy_name: Vec<String>,
    pub recipy: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReplyResponse {
    pub success: bool,
    pub output: String,
    pub error: Option<String>,
}
