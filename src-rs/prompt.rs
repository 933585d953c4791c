//! Prompt construction for every completion call the pipeline makes.
//!
//! Everything here is pure string assembly: the same inputs always produce
//! the same prompt text, which keeps the fake provider's substring matching
//! and the tests stable.

use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// System turn sent ahead of the recipe prompt.
pub const RECIPE_SYSTEM_PROMPT: &str =
    "You are a helpful recipe expert. Create detailed, unique recipes using only the provided ingredients.";

/// Build the task extraction prompt.
///
/// `today` and `tomorrow` are written out as literal calendar dates so the
/// model never resolves relative dates against its own idea of "now".
pub fn build_extraction_prompt(message: &str, today: NaiveDate, tomorrow: NaiveDate) -> String {
    let today_str = today.format(DATE_FORMAT).to_string();
    let tomorrow_str = tomorrow.format(DATE_FORMAT).to_string();
    let mut prompt = String::with_capacity(1024 + message.len());

    prompt.push_str(&format!(
        "Today's date is {}, {}.\n",
        today.format("%A"),
        today_str
    ));
    prompt.push_str("Extract ALL actionable, scheduled tasks from the message below. ");
    prompt.push_str("For each, return a JSON object with:\n");
    prompt.push_str(
        "- task_name: clear description PRESERVING the original language about WHO will do it\n",
    );
    prompt.push_str(
        "- time: in HH:MM am/pm format or 'Not specified' (calculate relative times like 'after two hours')\n",
    );
    prompt.push_str(&format!(
        "- date: in YYYY-MM-DD format (normalize ANY date expression, e.g., 'tomorrow' = '{}', 'today' = '{}', etc.)\n\n",
        tomorrow_str, today_str
    ));
    prompt.push_str("CRITICAL INSTRUCTIONS:\n");
    prompt.push_str("1. Include ALL tasks mentioned in the message, even if they conflict with other tasks\n");
    prompt.push_str("2. If tasks overlap at the same time, include BOTH as separate entries\n");
    prompt.push_str(
        "3. Include tasks even if the person says they're not important or can be rescheduled\n",
    );
    prompt.push_str(
        "4. Only include tasks that are definite actions to be performed, not wishes or possibilities\n\n",
    );
    prompt.push_str(&format!("Message: {}\n\n", message));
    prompt.push_str("Return a JSON array of ALL actionable tasks.");
    prompt
}

pub fn build_priority_prompt(task: &str) -> String {
    format!(
        r#"You are an expert task prioritization assistant. Analyze this task and determine its priority based on natural language understanding:

TASK: "{task}"

Consider these factors naturally:
- SAFETY: Does this affect someone's safety, health, or basic needs?
- TIME SENSITIVITY: How flexible is the timing? Are there consequences for delay?
- IMPACT: What happens if this task is delayed or not completed?

Return only this JSON object, where priority_score is a number from 1 to 10:
{{"priority_level": "High Priority" | "Medium Priority" | "Low Priority", "priority_score": 8.5}}"#
    )
}

pub fn build_responsibility_prompt(task: &str) -> String {
    format!(
        r#"TASK: "{task}"

Who will perform this task?
Analyze the task description and return one of the following values:
- "Self"
- "Partner"
- "Child"

Return only the value."#
    )
}

pub fn build_category_prompt(task: &str) -> String {
    format!(
        r#"TASK: "{task}"

Classify this task into one of the following categories:
- "Normal task"
- "Health task"
- "Recipy task"

Return only the category name."#
    )
}

/// Build the recipe prompt. Each recipe must open with a literal
/// `Recipe {n}:` marker; the response parser splits on those.
pub fn build_recipe_prompt(available_items: &str, meal_type: &str) -> String {
    format!(
        r#"You are an expert recipe assistant. Create exactly 3 unique recipes using ONLY these ingredients: {available_items}

Requirements:
1. Use ONLY the ingredients mentioned by the user
2. Each recipe must be completely different from the others
3. Provide detailed cooking instructions
4. Include cooking times and temperatures
5. Add kid-friendly tips and nutritional notes

Meal type: {meal_type}
Available ingredients: {available_items}

Create 3 unique recipes with these names:
- Recipe 1: [Creative name using available ingredients]
- Recipe 2: [Different creative name using available ingredients]
- Recipe 3: [Third different creative name using available ingredients]

For each recipe, write 5-6 sentences with:
- Step-by-step cooking instructions
- Cooking times and temperatures
- Tips for mothers and kids
- Serving suggestions

Start every recipe on its own line with its marker, for example "Recipe 2: Lemon Rice".
Format your response as a clear list of 3 recipes with names and detailed descriptions."#
    )
}
