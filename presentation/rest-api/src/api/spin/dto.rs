use poem_openapi::Object;

use business::domain::draw::model::{DrawRequest, PlanDay, SharedIngredient, WeeklyPlan};

use crate::api::preferences::dto::{
    CalorieFilterDto, DietaryFilterDto, TierDto, TimeFilterDto, to_dietary_filters,
};
use crate::api::recipes::dto::RecipeResponse;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct SpinRequest {
    /// Dietary filters the pool was loaded with
    #[oai(default)]
    pub dietary: Vec<DietaryFilterDto>,
    pub time: TimeFilterDto,
    pub calories: CalorieFilterDto,
    pub tier: TierDto,
}

impl From<SpinRequest> for DrawRequest {
    fn from(req: SpinRequest) -> Self {
        Self {
            dietary: to_dietary_filters(req.dietary),
            time: req.time.into(),
            calories: req.calories.into(),
            tier: req.tier.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PlanDayResponse {
    /// Monday to Sunday
    pub day: String,
    pub recipe: RecipeResponse,
}

impl From<PlanDay> for PlanDayResponse {
    fn from(d: PlanDay) -> Self {
        Self {
            day: d.day,
            recipe: d.recipe.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct SharedIngredientResponse {
    pub name: String,
    /// Number of recipes in the plan using this ingredient
    pub count: usize,
}

impl From<SharedIngredient> for SharedIngredientResponse {
    fn from(s: SharedIngredient) -> Self {
        Self {
            name: s.name,
            count: s.count,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct WeeklyPlanResponse {
    pub id: String,
    pub days: Vec<PlanDayResponse>,
    pub shared_ingredients: Vec<SharedIngredientResponse>,
    /// Ingredient lines across the week
    pub total_items: usize,
    /// Shopping list size once shared ingredients are merged
    pub reduced_items: usize,
}

impl From<WeeklyPlan> for WeeklyPlanResponse {
    fn from(p: WeeklyPlan) -> Self {
        Self {
            id: p.id,
            days: p.days.into_iter().map(Into::into).collect(),
            shared_ingredients: p.shared_ingredients.into_iter().map(Into::into).collect(),
            total_items: p.total_items,
            reduced_items: p.reduced_items,
        }
    }
}
