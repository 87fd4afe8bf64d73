use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::pool::use_cases::load::LoadPoolUseCase;

use crate::api::pools::dto::{LoadPoolRequest, PoolResponse};
use crate::api::tags::ApiTags;

pub struct PoolApi {
    load_use_case: Arc<dyn LoadPoolUseCase>,
}

impl PoolApi {
    pub fn new(load_use_case: Arc<dyn LoadPoolUseCase>) -> Self {
        Self { load_use_case }
    }
}

/// Pool API
///
/// Warms the recipe pool for a preference set so later spins can draw from it.
#[OpenApi]
impl PoolApi {
    /// Load a recipe pool
    ///
    /// Returns the cached pool for the given filters and tier, fetching it on a
    /// miss. Upstream failures fall back to the bundled recipes, so this never
    /// fails.
    #[oai(path = "/pools", method = "post", tag = "ApiTags::Pools")]
    async fn load_pool(&self, body: Json<LoadPoolRequest>) -> LoadPoolResponse {
        let loaded = self.load_use_case.execute(body.0.into()).await;
        LoadPoolResponse::Ok(Json(loaded.into()))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoadPoolResponse {
    #[oai(status = 200)]
    Ok(Json<PoolResponse>),
}
