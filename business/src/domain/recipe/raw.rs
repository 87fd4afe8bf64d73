use serde::{Deserialize, Deserializer, Serialize};

/// Recipe record as returned by the upstream recipe API (and as stored in the
/// bundled fixture table). Missing fields fall back to their defaults so a
/// sparse record still decodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRecipe {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub ready_in_minutes: u32,
    pub servings: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    pub dairy_free: bool,
    pub ketogenic: bool,
    pub low_fodmap: bool,
    pub sustainable: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub extended_ingredients: Vec<RawIngredient>,
    #[serde(deserialize_with = "null_as_default")]
    pub cuisines: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub dish_types: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub source_url: String,
    pub spoonacular_score: Option<f64>,
    pub aggregate_likes: Option<u32>,
    pub analyzed_instructions: Option<Vec<RawInstructionGroup>>,
    pub nutrition: Option<RawNutrition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawIngredient {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub unit: String,
    #[serde(deserialize_with = "null_as_default")]
    pub original: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawNutrient {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawNutrition {
    #[serde(deserialize_with = "null_as_default")]
    pub nutrients: Vec<RawNutrient>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInstructionGroup {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub steps: Vec<RawStep>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawStep {
    pub number: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub step: String,
    pub length: Option<RawStepLength>,
}

/// Explicit step duration, e.g. `{ "number": 15, "unit": "minutes" }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawStepLength {
    pub number: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub unit: String,
}

/// Upstream records sometimes carry `null` where a string or list is
/// expected; treat it like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
