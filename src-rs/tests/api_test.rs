//! HTTP handler behavior, calling the axum handlers directly.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::NaiveDate;

use homeplan_rs::api::handlers::{
    handle_classify, handle_extract, handle_health, handle_plan, handle_recipes, handle_reply,
    ClassifyRequest, RecipeRequest, TextRequest,
};
use homeplan_rs::llm::FakeAdapter;
use homeplan_rs::task::{PriorityLevel, Responsibility};
use homeplan_rs::{Planner, PlannerConfig};

fn state(adapter: FakeAdapter) -> State<Arc<Planner>> {
    State(Arc::new(Planner::new(PlannerConfig::default(), Arc::new(adapter))))
}

fn text(text: &str) -> Json<TextRequest> {
    Json(TextRequest {
        text: text.to_string(),
        now: NaiveDate::from_ymd_opt(2025, 3, 1).and_then(|d| d.and_hms_opt(8, 0, 0)),
    })
}

#[tokio::test]
async fn health_reports_ok() {
    let Json(body) = handle_health().await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn extract_reports_success_and_failure_separately() {
    let ok = state(FakeAdapter::with_response(
        "Extract ALL actionable",
        r#"[{"task_name": "Walk the dog", "time": "07:00 pm", "date": "today"}]"#,
    ));
    let Json(resp) = handle_extract(ok, text("walk the dog at 7pm")).await;
    assert!(resp.success);
    assert_eq!(resp.tasks.len(), 1);
    assert_eq!(resp.tasks[0].date, "2025-03-01");

    let Json(resp) = handle_extract(state(FakeAdapter::new()), text("walk the dog at 7pm")).await;
    assert!(!resp.success);
    assert!(resp.tasks.is_empty());
    assert!(resp.error.is_some());
}

#[tokio::test]
async fn empty_text_is_rejected() {
    let Json(resp) = handle_extract(state(FakeAdapter::new()), text("   ")).await;
    assert_eq!(resp.error.as_deref(), Some("text required"));
    let Json(resp) = handle_plan(state(FakeAdapter::new()), text("")).await;
    assert_eq!(resp.error.as_deref(), Some("text required"));
    let Json(resp) = handle_reply(state(FakeAdapter::new()), text("")).await;
    assert!(!resp.success);
}

#[tokio::test]
async fn classify_falls_back_to_defaults() {
    let Json(resp) = handle_classify(
        state(FakeAdapter::new()),
        Json(ClassifyRequest {
            task: "Renew passport".to_string(),
        }),
    )
    .await;
    assert_eq!(resp.priority.priority_level, PriorityLevel::Medium);
    assert_eq!(resp.responsibility, Responsibility::Myself);

    let body = serde_json::to_value(&resp).unwrap();
    assert_eq!(body["priority_level"], "Medium Priority");
    assert_eq!(body["category"], "Normal task");
}

#[tokio::test]
async fn recipes_use_wire_field_names() {
    let Json(set) = handle_recipes(
        state(FakeAdapter::new()),
        Json(RecipeRequest {
            items: "mutton, rice".to_string(),
            conversation: Some("dinner tonight".to_string()),
        }),
    )
    .await;
    let body = serde_json::to_value(&set).unwrap();
    assert_eq!(body["meal_type"], "Dinner");
    assert_eq!(body["task_catagory"], "Recipy task");
    assert_eq!(body["recipy_name"][0], "Recipe 1: Mutton Biryani Delight");
    assert_eq!(body["recipy"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn plan_returns_classified_tasks() {
    let adapter = FakeAdapter::with_response(
        "Extract ALL actionable",
        r#"[{"task_name": "Child packs school bag", "time": "Not specified", "date": "2025-03-01"}]"#,
    )
    .and_response("Who will perform", "Child");
    let Json(resp) = handle_plan(state(adapter), text("my son packs his bag")).await;
    assert!(resp.error.is_none());
    assert_eq!(resp.tasks.len(), 1);
    assert_eq!(resp.tasks[0].responsibility, Responsibility::Child);
}
