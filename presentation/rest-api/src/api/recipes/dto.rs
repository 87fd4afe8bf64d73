use poem_openapi::Object;

use business::domain::recipe::model::{Ingredient, Recipe, RecipeStep};

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct IngredientResponse {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    pub unit: String,
    /// Ingredient line as written in the source recipe
    pub original: String,
}

impl From<Ingredient> for IngredientResponse {
    fn from(i: Ingredient) -> Self {
        Self {
            id: i.id,
            name: i.name,
            amount: i.amount,
            unit: i.unit,
            original: i.original,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct RecipeStepResponse {
    pub text: String,
    /// Step duration in seconds, when known
    #[oai(skip_serializing_if_is_none)]
    pub duration_seconds: Option<u32>,
}

impl From<RecipeStep> for RecipeStepResponse {
    fn from(s: RecipeStep) -> Self {
        Self {
            text: s.text,
            duration_seconds: s.duration_seconds,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct RecipeResponse {
    pub id: String,
    pub name: String,
    /// Preparation time, e.g. "25 min"
    pub time: String,
    /// "420 cal", or "—" when nutrition is unavailable
    pub calories: String,
    pub servings: String,
    pub description: String,
    pub tags: Vec<String>,
    pub emoji: String,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub ingredients: Option<Vec<IngredientResponse>>,
    #[oai(skip_serializing_if_is_none)]
    pub instructions: Option<Vec<RecipeStepResponse>>,
    /// Upstream score, 0-100
    #[oai(skip_serializing_if_is_none)]
    pub rating: Option<u32>,
    #[oai(skip_serializing_if_is_none)]
    pub source_url: Option<String>,
}

impl From<Recipe> for RecipeResponse {
    fn from(r: Recipe) -> Self {
        Self {
            id: r.id,
            name: r.name,
            time: r.time,
            calories: r.calories,
            servings: r.servings,
            description: r.description,
            tags: r.tags,
            emoji: r.emoji,
            image_url: r.image_url,
            ingredients: r
                .ingredients
                .map(|list| list.into_iter().map(Into::into).collect()),
            instructions: r
                .instructions
                .map(|steps| steps.into_iter().map(Into::into).collect()),
            rating: r.rating,
            source_url: r.source_url,
        }
    }
}
