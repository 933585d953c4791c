use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::prompt::DATE_FORMAT;

pub const RECIPE_TASK_CATEGORY: &str = "Recipy task";

const MEAL_VOCABULARY: [(&str, MealType); 7] = [
    ("breakfast", MealType::Breakfast),
    ("lunch", MealType::Lunch),
    ("dinner", MealType::Dinner),
    ("snack", MealType::Snack),
    ("snacks", MealType::Snack),
    ("brunch", MealType::Brunch),
    ("supper", MealType::Dinner),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Brunch,
    Lunch,
    Dinner,
    Snack,
    #[serde(rename = "Other meal")]
    Other,
}

impl MealType {
    /// Scan the conversation for a meal keyword. Vocabulary order decides
    /// between several keywords, not their position in the text. A word
    /// matches when it starts with the keyword ("breakfasts", "lunchtime"),
    /// so "brunch" is not read as "lunch".
    pub fn detect(conversation: &str) -> Self {
        let words: Vec<String> = conversation
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect();
        MEAL_VOCABULARY
            .iter()
            .find(|(keyword, _)| words.iter().any(|w| w.starts_with(*keyword)))
            .map(|(_, meal)| *meal)
            .unwrap_or(MealType::Other)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Brunch => "Brunch",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
            MealType::Other => "Other meal",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedAt {
    pub time: String,
    pub date: String,
}

impl GeneratedAt {
    pub fn from_datetime(now: NaiveDateTime) -> Self {
        Self {
            time: now.format("%I:%M %p").to_string(),
            date: now.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Three recipe suggestions. The fixed-size arrays carry the
/// three-names/three-bodies invariant; field renames keep the historical
/// wire names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSet {
    pub meal_type: MealType,
    #[serde(rename = "task_catagory")]
    pub category: String,
    #[serde(flatten)]
    pub generated_at: GeneratedAt,
    pub items_available: String,
    pub items_needed: String,
    #[serde(rename = "recipy_name")]
    pub names: [String; 3],
    #[serde(rename = "recipy")]
    pub bodies: [String; 3],
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn detects_meal_keywords() {
        assert_eq!(MealType::detect("what can I make for Breakfast?"), MealType::Breakfast);
        assert_eq!(MealType::detect("quick snacks for the kids"), MealType::Snack);
        assert_eq!(MealType::detect("sunday brunch"), MealType::Brunch);
        assert_eq!(MealType::detect("supper tonight"), MealType::Dinner);
        assert_eq!(MealType::detect("I have some rice"), MealType::Other);
        assert_eq!(MealType::detect(""), MealType::Other);
    }

    #[test]
    fn plural_and_compound_forms_count() {
        assert_eq!(MealType::detect("quick breakfasts"), MealType::Breakfast);
        assert_eq!(MealType::detect("any lunchtime ideas?"), MealType::Lunch);
        assert_eq!(MealType::detect("Dinnertime!"), MealType::Dinner);
        assert_eq!(MealType::detect("brunches are fun"), MealType::Brunch);
        assert_eq!(MealType::detect("a snackable bite"), MealType::Snack);
    }

    #[test]
    fn vocabulary_order_breaks_ties() {
        assert_eq!(MealType::detect("dinner or maybe lunch"), MealType::Lunch);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let now = NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(15, 5, 0)
            .unwrap();
        let set = RecipeSet {
            meal_type: MealType::Other,
            category: RECIPE_TASK_CATEGORY.to_string(),
            generated_at: GeneratedAt::from_datetime(now),
            items_available: "rice".to_string(),
            items_needed: "salt".to_string(),
            names: ["a".to_string(), "b".to_string(), "c".to_string()],
            bodies: ["x".to_string(), "y".to_string(), "z".to_string()],
        };
        let value = serde_json::to_value(&set).unwrap();
        assert_eq!(value["meal_type"], "Other meal");
        assert_eq!(value["task_catagory"], "Recipy task");
        assert_eq!(value["time"], "03:05 PM");
        assert_eq!(value["date"], "2025-03-01");
        assert_eq!(value["recipy_name"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["recipy"][2], "z");
    }
}
