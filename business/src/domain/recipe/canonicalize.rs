use super::model::{CALORIES_UNKNOWN, Ingredient, Recipe, RecipeStep};
use super::raw::{RawIngredient, RawRecipe, RawStep};
use super::text::{detect_duration, strip_markup, to_seconds};

/// Emoji used when neither dish type nor cuisine is recognised.
pub const DEFAULT_EMOJI: &str = "🍲";

const DISH_TYPE_EMOJI: &[(&str, &str)] = &[
    ("main course", "🍽️"),
    ("main dish", "🍽️"),
    ("soup", "🍜"),
    ("salad", "🥗"),
    ("breakfast", "🍳"),
    ("brunch", "🍳"),
    ("dessert", "🍰"),
    ("side dish", "🥘"),
    ("snack", "🥙"),
    ("appetizer", "🥗"),
];

const CUISINE_EMOJI: &[(&str, &str)] = &[
    ("italian", "🍝"),
    ("mexican", "🌮"),
    ("japanese", "🍣"),
    ("indian", "🍛"),
    ("american", "🍔"),
    ("french", "🥖"),
    ("chinese", "🥡"),
    ("thai", "🍜"),
    ("mediterranean", "🫒"),
    ("greek", "🫒"),
    ("spanish", "🥘"),
    ("korean", "🍱"),
    ("vietnamese", "🍲"),
    ("middle eastern", "🧆"),
];

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    let key = key.to_lowercase();
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, emoji)| *emoji)
}

/// Picks the recipe glyph. Dish type wins over cuisine.
pub fn pick_emoji(dish_types: &[String], cuisines: &[String]) -> &'static str {
    dish_types
        .iter()
        .find_map(|dish_type| lookup(DISH_TYPE_EMOJI, dish_type))
        .or_else(|| {
            cuisines
                .iter()
                .find_map(|cuisine| lookup(CUISINE_EMOJI, cuisine))
        })
        .unwrap_or(DEFAULT_EMOJI)
}

/// "middle EASTERN" -> "Middle eastern"
fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str().to_lowercase();
            first.to_uppercase().chain(rest.chars()).collect()
        }
        None => String::new(),
    }
}

/// Builds display tags: dietary flags, then a time bucket, then cuisines.
pub fn build_tags(raw: &RawRecipe) -> Vec<String> {
    let flags = [
        (raw.vegetarian, "Vegetarian"),
        (raw.vegan, "Vegan"),
        (raw.gluten_free, "Gluten Free"),
        (raw.dairy_free, "Dairy Free"),
        (raw.ketogenic, "Keto"),
        (raw.low_fodmap, "Low FODMAP"),
    ];

    let mut tags: Vec<String> = flags
        .iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, label)| label.to_string())
        .collect();

    if raw.ready_in_minutes <= 30 {
        tags.push("Under 30 Min".to_string());
    } else if raw.ready_in_minutes <= 60 {
        tags.push("Under 60 Min".to_string());
    }

    for cuisine in &raw.cuisines {
        let label = capitalize(cuisine);
        if !tags.contains(&label) {
            tags.push(label);
        }
    }

    tags
}

fn map_ingredient(raw: &RawIngredient) -> Ingredient {
    Ingredient {
        id: raw.id,
        name: raw.name.clone(),
        amount: raw.amount,
        unit: raw.unit.clone(),
        original: raw.original.clone(),
    }
}

fn map_step(raw: &RawStep) -> RecipeStep {
    // An explicit length always wins over numbers mentioned in the text.
    let duration_seconds = match &raw.length {
        Some(length) => to_seconds(length.number, &length.unit),
        None => detect_duration(&raw.step),
    };
    RecipeStep {
        text: raw.step.clone(),
        duration_seconds,
    }
}

fn calories_label(raw: &RawRecipe) -> String {
    raw.nutrition
        .as_ref()
        .and_then(|nutrition| nutrition.nutrients.iter().find(|n| n.name == "Calories"))
        .map(|nutrient| format!("{} cal", nutrient.amount.round() as i64))
        .unwrap_or_else(|| CALORIES_UNKNOWN.to_string())
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Maps an upstream record onto the app's [`Recipe`] shape.
///
/// Pure and total: the same input always yields an equal recipe.
pub fn canonicalize(raw: &RawRecipe) -> Recipe {
    let instructions = raw
        .analyzed_instructions
        .as_ref()
        .and_then(|groups| groups.first())
        .map(|group| group.steps.iter().map(map_step).collect());

    Recipe {
        id: raw.id.to_string(),
        name: raw.title.clone(),
        time: format!("{} min", raw.ready_in_minutes),
        calories: calories_label(raw),
        servings: format!("{} servings", raw.servings),
        description: strip_markup(&raw.summary),
        tags: build_tags(raw),
        emoji: pick_emoji(&raw.dish_types, &raw.cuisines).to_string(),
        image_url: non_empty(&raw.image),
        ingredients: Some(raw.extended_ingredients.iter().map(map_ingredient).collect()),
        instructions,
        rating: raw
            .spoonacular_score
            .map(|score| score.round().clamp(0.0, 100.0) as u32),
        source_url: non_empty(&raw.source_url),
    }
}
