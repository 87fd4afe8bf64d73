use poem_openapi::Object;

use business::domain::pool::use_cases::load::{LoadPoolParams, LoadedPool};

use crate::api::preferences::dto::{DietaryFilterDto, TierDto, to_dietary_filters};
use crate::api::recipes::dto::RecipeResponse;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct LoadPoolRequest {
    /// Active dietary filters; order and repeats do not matter
    #[oai(default)]
    pub dietary: Vec<DietaryFilterDto>,
    pub tier: TierDto,
}

impl From<LoadPoolRequest> for LoadPoolParams {
    fn from(req: LoadPoolRequest) -> Self {
        Self {
            dietary: to_dietary_filters(req.dietary),
            tier: req.tier.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PoolResponse {
    /// Cache key the pool is stored under
    pub fingerprint: String,
    pub size: usize,
    pub recipes: Vec<RecipeResponse>,
}

impl From<LoadedPool> for PoolResponse {
    fn from(loaded: LoadedPool) -> Self {
        Self {
            fingerprint: loaded.fingerprint.to_string(),
            size: loaded.pool.len(),
            recipes: loaded
                .pool
                .into_recipes()
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}
