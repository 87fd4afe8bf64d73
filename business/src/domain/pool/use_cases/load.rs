use async_trait::async_trait;

use crate::domain::pool::fingerprint::Fingerprint;
use crate::domain::pool::model::Pool;
use crate::domain::preferences::value_objects::{DietaryFilter, Tier};

pub struct LoadPoolParams {
    pub dietary: Vec<DietaryFilter>,
    pub tier: Tier,
}

#[derive(Debug, Clone)]
pub struct LoadedPool {
    pub fingerprint: Fingerprint,
    pub pool: Pool,
}

/// Returns the pool for a preference set, fetching it on a cache miss.
/// Never fails; upstream problems degrade to the fixture pool.
#[async_trait]
pub trait LoadPoolUseCase: Send + Sync {
    async fn execute(&self, params: LoadPoolParams) -> LoadedPool;
}
