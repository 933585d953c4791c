use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::planner::Planner;
use crate::recipe::fallback::fallback_recipes;
use crate::recipe::{MealType, RecipeSet};
use crate::task::{ClassifiedTask, ExtractedTask, Priority, Responsibility, TaskCategory};

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
    /// Reference time for relative dates; the server's local time if absent.
    pub now: Option<NaiveDateTime>,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub task: String,
}

#[derive(Debug, Deserialize)]
pub struct RecipeRequest {
    pub items: String,
    pub conversation: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub success: bool,
    pub tasks: Vec<ExtractedTask>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub tasks: Vec<ClassifiedTask>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    #[serde(flatten)]
    pub priority: Priority,
    pub responsibility: Responsibility,
    pub category: TaskCategory,
}

#[derive(Debug, Serialize)]
pub struct ReplyResponse {
    pub success: bool,
    pub output: String,
    pub error: Option<String>,
}

pub async fn handle_health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok", "version": env!("CARGO_PKG_VERSION")}))
}

/// Unlike the planner's total `extract_tasks`, this reports a failed call as
/// `success: false` so clients can tell it apart from "no tasks found".
pub async fn handle_extract(
    State(planner): State<Arc<Planner>>,
    Json(req): Json<TextRequest>,
) -> Json<ExtractResponse> {
    if req.text.trim().is_empty() {
        return Json(ExtractResponse {
            success: false,
            tasks: Vec::new(),
            error: Some("text required".to_string()),
        });
    }
    let now = req.now.unwrap_or_else(local_now);
    let result =
        tokio::task::spawn_blocking(move || planner.try_extract_tasks(&req.text, now)).await;

    match result {
        Ok(Ok(tasks)) => Json(ExtractResponse {
            success: true,
            tasks,
            error: None,
        }),
        Ok(Err(err)) => Json(ExtractResponse {
            success: false,
            tasks: Vec::new(),
            error: Some(err.to_string()),
        }),
        Err(err) => Json(ExtractResponse {
            success: false,
            tasks: Vec::new(),
            error: Some(err.to_string()),
        }),
    }
}

pub async fn handle_plan(
    State(planner): State<Arc<Planner>>,
    Json(req): Json<TextRequest>,
) -> Json<PlanResponse> {
    if req.text.trim().is_empty() {
        return Json(PlanResponse {
            tasks: Vec::new(),
            error: Some("text required".to_string()),
        });
    }
    let now = req.now.unwrap_or_else(local_now);
    let result = tokio::task::spawn_blocking(move || planner.plan_tasks(&req.text, now)).await;

    match result {
        Ok(tasks) => Json(PlanResponse { tasks, error: None }),
        Err(err) => Json(PlanResponse {
            tasks: Vec::new(),
            error: Some(err.to_string()),
        }),
    }
}

pub async fn handle_classify(
    State(planner): State<Arc<Planner>>,
    Json(req): Json<ClassifyRequest>,
) -> Json<ClassifyResponse> {
    let result = tokio::task::spawn_blocking(move || ClassifyResponse {
        priority: planner.classify_priority(&req.task),
        responsibility: planner.classify_responsibility(&req.task),
        category: planner.classify_category(&req.task),
    })
    .await;

    Json(result.unwrap_or_else(|err| {
        tracing::error!(error = %err, "classification task panicked");
        ClassifyResponse {
            priority: Priority::default(),
            responsibility: Responsibility::default(),
            category: TaskCategory::default(),
        }
    }))
}

pub async fn handle_recipes(
    State(planner): State<Arc<Planner>>,
    Json(req): Json<RecipeRequest>,
) -> Json<RecipeSet> {
    let now = local_now();
    let items = req.items.clone();
    let conversation = req.conversation.clone();
    let result = tokio::task::spawn_blocking(move || {
        planner.suggest_recipes(&items, conversation.as_deref(), now)
    })
    .await;

    Json(result.unwrap_or_else(|err| {
        tracing::error!(error = %err, "recipe task panicked");
        let meal_type = MealType::detect(req.conversation.as_deref().unwrap_or(""));
        fallback_recipes(&req.items, meal_type, now)
    }))
}

pub async fn handle_reply(
    State(planner): State<Arc<Planner>>,
    Json(req): Json<TextRequest>,
) -> Json<ReplyResponse> {
    if req.text.trim().is_empty() {
        return Json(ReplyResponse {
            success: false,
            output: String::new(),
            error: Some("text required".to_string()),
        });
    }
    let result = tokio::task::spawn_blocking(move || planner.reply(&req.text)).await;

    match result {
        Ok(Ok(output)) => Json(ReplyResponse {
            success: true,
            output,
            error: None,
        }),
        Ok(Err(err)) => Json(ReplyResponse {
            success: false,
            output: String::new(),
            error: Some(err.to_string()),
        }),
        Err(err) => Json(ReplyResponse {
            success: false,
            output: String::new(),
            error: Some(err.to_string()),
        }),
    }
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
