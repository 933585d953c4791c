//! Rule-based recipes used when the model path produces nothing usable.

use chrono::NaiveDateTime;

use super::types::{GeneratedAt, MealType, RecipeSet, RECIPE_TASK_CATEGORY};

pub const FALLBACK_ITEMS_NEEDED: &str = "Salt, pepper, herbs";

struct Template {
    /// Every needle must occur in the lowercased ingredient list.
    signature: &'static [&'static str],
    names: [&'static str; 3],
    bodies: [&'static str; 3],
}

static SIGNATURE_TEMPLATES: [Template; 3] = [
    Template {
        signature: &["mutton", "rice"],
        names: [
            "Recipe 1: Mutton Biryani Delight",
            "Recipe 2: Mutton Stew",
            "Recipe 3: Mutton Veggie Pilaf",
        ],
        bodies: [
            "Recipe 1: Brown the mutton in a heavy pot for 10 minutes, add soaked rice and twice its volume of water, then cover and cook on low heat for 25 minutes until the rice is fluffy.",
            "Recipe 2: Simmer the mutton in water with salt for 90 minutes until tender, then add a handful of rice for the last 20 minutes to thicken the stew.",
            "Recipe 3: Cook diced mutton until browned, stir in rice and any vegetables, add water and simmer covered for 20 minutes; rest 5 minutes before serving.",
        ],
    },
    Template {
        signature: &["chicken", "rice"],
        names: [
            "Recipe 1: Chicken Fried Rice",
            "Recipe 2: Chicken Rice Soup",
            "Recipe 3: One-Pot Chicken and Rice",
        ],
        bodies: [
            "Recipe 1: Cook diced chicken in a hot pan for 6-8 minutes, add cooked rice and stir-fry for 5 minutes until lightly crisp.",
            "Recipe 2: Simmer chicken in water for 25 minutes, shred it, return it to the pot with rice and cook 15 minutes more.",
            "Recipe 3: Brown chicken pieces, add rice and water, cover and cook on low heat for 20 minutes until the liquid is absorbed.",
        ],
    },
    Template {
        signature: &["egg", "bread"],
        names: [
            "Recipe 1: French Toast",
            "Recipe 2: Egg in a Hole",
            "Recipe 3: Egg Sandwich",
        ],
        bodies: [
            "Recipe 1: Beat the eggs, soak each bread slice for a few seconds and fry 2-3 minutes per side over medium heat.",
            "Recipe 2: Cut a hole in a bread slice, toast it in a pan, crack an egg into the hole and cook 3 minutes per side.",
            "Recipe 3: Scramble the eggs over low heat for 3 minutes and serve between toasted bread slices.",
        ],
    },
];

static GENERIC_TEMPLATE: Template = Template {
    signature: &[],
    names: [
        "Recipe 1: Veggie Soup",
        "Recipe 2: Simple Salad",
        "Recipe 3: Pasta Dish",
    ],
    bodies: [
        "Recipe 1: Chop the vegetables you have, cover with water, season and simmer for 20-25 minutes until soft.",
        "Recipe 2: Slice fresh vegetables, toss with a little oil, salt and pepper, and serve chilled.",
        "Recipe 3: Boil pasta for 8-10 minutes, drain, and toss with sautéed vegetables and seasoning.",
    ],
};

/// Pick a canned three-recipe set for the ingredient list. The first template
/// whose signature is fully present wins; otherwise the generic one is used.
pub fn fallback_recipes(available_items: &str, meal_type: MealType, now: NaiveDateTime) -> RecipeSet {
    let items = available_items.to_lowercase();
    let template = SIGNATURE_TEMPLATES
        .iter()
        .find(|t| t.signature.iter().all(|needle| items.contains(needle)))
        .unwrap_or(&GENERIC_TEMPLATE);

    RecipeSet {
        meal_type,
        category: RECIPE_TASK_CATEGORY.to_string(),
        generated_at: GeneratedAt::from_datetime(now),
        items_available: available_items.to_string(),
        items_needed: FALLBACK_ITEMS_NEEDED.to_string(),
        names: template.names.map(str::to_string),
        bodies: template.bodies.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn mutton_and_rice_select_the_biryani_template() {
        let set = fallback_recipes("Mutton, Rice, onions", MealType::Dinner, now());
        assert_eq!(set.names[0], "Recipe 1: Mutton Biryani Delight");
        assert_eq!(set.names[2], "Recipe 3: Mutton Veggie Pilaf");
        assert_eq!(set.items_needed, FALLBACK_ITEMS_NEEDED);
        assert_eq!(set.meal_type, MealType::Dinner);
    }

    #[test]
    fn one_signature_ingredient_is_not_enough() {
        let set = fallback_recipes("mutton, potatoes", MealType::Other, now());
        assert_eq!(set.names[0], "Recipe 1: Veggie Soup");
    }

    #[test]
    fn every_template_has_three_numbered_entries() {
        for template in SIGNATURE_TEMPLATES.iter().chain(std::iter::once(&GENERIC_TEMPLATE)) {
            for (i, (name, body)) in template.names.iter().zip(template.bodies.iter()).enumerate() {
                let marker = format!("Recipe {}:", i + 1);
                assert!(name.starts_with(&marker), "{name}");
                assert!(body.starts_with(&marker), "{body}");
            }
        }
    }
}
