//! End-to-end pipeline behavior against the offline fake provider.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::json;

use homeplan_rs::llm::FakeAdapter;
use homeplan_rs::recipe::MealType;
use homeplan_rs::task::{PriorityLevel, Responsibility, TaskCategory};
use homeplan_rs::{PipelineError, Planner, PlannerConfig};

const EXTRACTION_NEEDLE: &str = "Extract ALL actionable";
const PRIORITY_NEEDLE: &str = "expert task prioritization";
const RESPONSIBILITY_NEEDLE: &str = "Who will perform";
const CATEGORY_NEEDLE: &str = "Classify this task";
const RECIPE_NEEDLE: &str = "Create exactly 3 unique recipes";

fn reference_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

fn build_planner(adapter: FakeAdapter) -> (Planner, Arc<FakeAdapter>) {
    let adapter = Arc::new(adapter);
    (Planner::new(PlannerConfig::default(), adapter.clone()), adapter)
}

#[test]
fn duplicate_tomorrow_tasks_collapse_to_one() {
    let response = r#"```json
[
  {"task_name": "Pick up the kids tomorrow", "time": "03:00 pm", "date": "2025-03-05"},
  {"task_name": "Pick up  the kids tomorrow ", "time": " 03:00 pm", "date": "tomorrow"}
]
```"#;
    let (planner, _) = build_planner(FakeAdapter::with_response(EXTRACTION_NEEDLE, response));
    let tasks = planner.extract_tasks(
        "I need to pick up the kids tomorrow at 3pm. Don't forget: pick up the kids tomorrow at 3pm!",
        reference_now(),
    );

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].task_name, "Pick up the kids tomorrow");
    assert_eq!(tasks[0].time, "03:00 pm");
    assert_eq!(tasks[0].date, "2025-03-02");
}

#[test]
fn extraction_prompt_carries_literal_anchor_dates() {
    let (planner, _) = build_planner(FakeAdapter::with_response("'tomorrow' = '2025-03-02'", "[]"));
    let result = planner.try_extract_tasks("nothing to do", reference_now());
    assert!(matches!(result, Ok(ref tasks) if tasks.is_empty()));
}

#[test]
fn extraction_failure_is_distinguishable_only_through_try() {
    let (planner, _) = build_planner(FakeAdapter::new());
    assert!(planner.extract_tasks("call mom at noon", reference_now()).is_empty());
    assert!(matches!(
        planner.try_extract_tasks("call mom at noon", reference_now()),
        Err(PipelineError::Provider(_))
    ));

    let (planner, _) = build_planner(FakeAdapter::with_response(EXTRACTION_NEEDLE, "I found two tasks."));
    assert!(planner.extract_tasks("call mom at noon", reference_now()).is_empty());
    assert!(matches!(
        planner.try_extract_tasks("call mom at noon", reference_now()),
        Err(PipelineError::Parse(_))
    ));
}

#[test]
fn classifiers_default_when_provider_fails() {
    let (planner, _) = build_planner(FakeAdapter::new());

    let priority = planner.classify_priority("Take grandma to the doctor");
    assert_eq!(
        serde_json::to_value(priority).unwrap(),
        json!({"priority_level": "Medium Priority", "priority_score": 5.0})
    );
    assert_eq!(planner.classify_responsibility("Take grandma to the doctor"), Responsibility::Myself);
    assert_eq!(planner.classify_category("Take grandma to the doctor"), TaskCategory::Normal);
}

#[test]
fn classifiers_default_on_unparseable_answers() {
    let (planner, _) = build_planner(FakeAdapter::with_default_response("I'm not sure, it depends."));
    assert_eq!(planner.classify_priority("x y").priority_level, PriorityLevel::Medium);
    assert_eq!(planner.classify_responsibility("x y"), Responsibility::Myself);
    assert_eq!(planner.classify_category("x y"), TaskCategory::Normal);
}

#[test]
fn plan_tasks_classifies_each_extracted_task() {
    let adapter = FakeAdapter::with_response(
        EXTRACTION_NEEDLE,
        r#"[{"task_name": "Refill insulin prescription", "time": "10:00 am", "date": "2025-03-01"},
            {"task_name": "Partner buys groceries", "time": "Not specified", "date": "2025-03-01"},
            {"task_name": "Shopping", "time": "", "date": ""}]"#,
    )
    .and_response(PRIORITY_NEEDLE, r#"{"priority_level": "High Priority", "priority_score": 9}"#)
    .and_response(RESPONSIBILITY_NEEDLE, "Partner")
    .and_response(CATEGORY_NEEDLE, "Health task");
    let (planner, adapter) = build_planner(adapter);

    let tasks = planner.plan_tasks("refill insulin at 10, partner does groceries", reference_now());
    assert_eq!(tasks.len(), 2);
    assert_eq!(adapter.calls(), 1 + 2 * 3);

    let first = &tasks[0];
    assert_eq!(first.task.task_name, "Refill insulin prescription");
    assert_eq!(first.priority.priority_level, PriorityLevel::High);
    assert_eq!(first.priority.priority_score, 9.0);
    assert_eq!(first.responsibility, Responsibility::Partner);
    assert_eq!(first.category, TaskCategory::Health);
}

#[test]
fn unreachable_provider_uses_mutton_rice_template() {
    let (planner, _) = build_planner(FakeAdapter::new());
    let set = planner.suggest_recipes("mutton, rice", None, reference_now());

    assert_eq!(
        set.names,
        [
            "Recipe 1: Mutton Biryani Delight".to_string(),
            "Recipe 2: Mutton Stew".to_string(),
            "Recipe 3: Mutton Veggie Pilaf".to_string(),
        ]
    );
    assert_eq!(set.category, "Recipy task");
    assert_eq!(set.items_available, "mutton, rice");
    assert_eq!(set.generated_at.time, "09:00 AM");
    assert_eq!(set.generated_at.date, "2025-03-01");
}

#[test]
fn meal_type_follows_the_conversation() {
    let (planner, _) = build_planner(FakeAdapter::new());
    let set = planner.suggest_recipes("eggs", Some("What can I cook for breakfast?"), reference_now());
    assert_eq!(set.meal_type, MealType::Breakfast);

    let set = planner.suggest_recipes("eggs", Some("I just have eggs"), reference_now());
    assert_eq!(set.meal_type, MealType::Other);
    assert_eq!(serde_json::to_value(&set).unwrap()["meal_type"], "Other meal");
}

#[test]
fn recipe_count_is_three_for_any_block_count() {
    for count in 0..=5 {
        let response: String = (1..=count)
            .map(|i| format!("Recipe {}: Dish {}\nStep for dish {}.\n", (i - 1) % 3 + 1, i, i))
            .collect();
        let (planner, _) = build_planner(FakeAdapter::with_response(RECIPE_NEEDLE, &response));
        let set = planner.suggest_recipes("rice, beans", Some("lunch"), reference_now());
        assert_eq!(set.names.len(), 3, "{count} blocks");
        assert_eq!(set.bodies.len(), 3, "{count} blocks");
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["recipy_name"].as_array().map(Vec::len), Some(3));
        assert_eq!(json["recipy"].as_array().map(Vec::len), Some(3));
    }
}

#[test]
fn repeated_jargon_is_explained_once_per_block() {
    let response = "Recipe 1: Onion Rice\nSauté the onions. Sauté the rice. Then sauté everything together.\n\
                    Recipe 2: Plain Rice\nBoil rice. Sauté nothing.\n\
                    Recipe 3: Rice Cakes\nPress rice into cakes.";
    let (planner, _) = build_planner(FakeAdapter::with_response(RECIPE_NEEDLE, response));
    let set = planner.suggest_recipes("rice, onions", None, reference_now());

    let explanation = "(cook quickly in a small amount of oil or butter over medium-high heat)";
    assert_eq!(set.bodies[0].matches(explanation).count(), 1);
    assert_eq!(set.bodies[1].matches(explanation).count(), 1);
    assert_eq!(set.bodies[2].matches(explanation).count(), 0);
    assert_eq!(set.items_needed, "Cooking oil, salt, black pepper, water, onions");
}

#[test]
fn reply_surfaces_provider_errors() {
    let (planner, _) = build_planner(FakeAdapter::new());
    assert!(planner.reply("hello").is_err());

    let (planner, _) = build_planner(FakeAdapter::with_default_response("  Hi there!  "));
    assert_eq!(planner.reply("hello").unwrap(), "Hi there!");
}
