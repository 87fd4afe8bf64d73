use serde::{Deserialize, Serialize};

use crate::domain::preferences::value_objects::{CalorieFilter, DietaryFilter, Tier, TimeFilter};
use crate::domain::recipe::model::Recipe;

pub const WEEK_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Debug, Clone, PartialEq)]
pub struct DrawRequest {
    pub dietary: Vec<DietaryFilter>,
    pub time: TimeFilter,
    pub calories: CalorieFilter,
    pub tier: Tier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDay {
    pub day: String,
    pub recipe: Recipe,
}

/// Ingredient that appears in at least two recipes of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedIngredient {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    pub id: String,
    pub days: Vec<PlanDay>,
    pub shared_ingredients: Vec<SharedIngredient>,
    pub total_items: usize,
    pub reduced_items: usize,
}
