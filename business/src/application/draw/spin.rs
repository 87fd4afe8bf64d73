use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::draw::engine::draw_one;
use crate::domain::draw::model::DrawRequest;
use crate::domain::draw::use_cases::spin::SpinRecipeUseCase;
use crate::domain::errors::ApiError;
use crate::domain::logger::Logger;
use crate::domain::pool::cache::PoolCache;
use crate::domain::pool::fingerprint::build_fingerprint;
use crate::domain::recipe::model::Recipe;

pub struct SpinRecipeUseCaseImpl {
    pub cache: Arc<dyn PoolCache>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SpinRecipeUseCase for SpinRecipeUseCaseImpl {
    async fn execute(&self, request: DrawRequest) -> Result<Recipe, ApiError> {
        let fingerprint = build_fingerprint(&request.dietary, request.tier);
        let pool = self.cache.get(&fingerprint);
        self.logger.debug(&format!(
            "Spinning from pool {} ({} recipes)",
            fingerprint,
            pool.as_ref().map_or(0, |p| p.len())
        ));

        let result = draw_one(pool.as_ref(), &request, &mut rand::rng());

        match &result {
            Ok(recipe) => self
                .logger
                .info(&format!("Drew recipe {} from pool {}", recipe.id, fingerprint)),
            Err(err) => self
                .logger
                .warn(&format!("Spin failed for pool {}: {}", fingerprint, err)),
        }
        result
    }
}
