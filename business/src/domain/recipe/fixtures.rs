use once_cell::sync::Lazy;

use super::raw::RawRecipe;

const FIXTURE_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/recipes.json"));

static FIXTURE_RECIPES: Lazy<Vec<RawRecipe>> =
    Lazy::new(|| serde_json::from_str(FIXTURE_JSON).unwrap_or_default());

/// Hand-written records in the upstream schema. Served whenever the live API
/// is unreachable, unconfigured or returns nothing usable.
pub fn fixture_recipes() -> &'static [RawRecipe] {
    &FIXTURE_RECIPES
}
