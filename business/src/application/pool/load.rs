use std::sync::Arc;

use async_trait::async_trait;

use crate::application::pool::fetcher::PoolFetcher;
use crate::domain::logger::Logger;
use crate::domain::pool::cache::PoolCache;
use crate::domain::pool::fingerprint::build_fingerprint;
use crate::domain::pool::use_cases::load::{LoadPoolParams, LoadPoolUseCase, LoadedPool};

pub struct LoadPoolUseCaseImpl {
    pub fetcher: Arc<PoolFetcher>,
    pub cache: Arc<dyn PoolCache>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoadPoolUseCase for LoadPoolUseCaseImpl {
    async fn execute(&self, params: LoadPoolParams) -> LoadedPool {
        let fingerprint = build_fingerprint(&params.dietary, params.tier);

        if let Some(pool) = self.cache.get(&fingerprint) {
            self.logger.debug(&format!(
                "Pool cache hit for {} ({} recipes)",
                fingerprint,
                pool.len()
            ));
            return LoadedPool { fingerprint, pool };
        }

        self.logger
            .info(&format!("Pool cache miss for {}, fetching", fingerprint));
        let pool = self.fetcher.fetch_pool(&params.dietary, params.tier).await;

        // cancelled loads never reach the cache
        self.cache.set(fingerprint.clone(), pool.clone());
        self.logger.info(&format!(
            "Cached pool {} with {} recipes",
            fingerprint,
            pool.len()
        ));

        LoadedPool { fingerprint, pool }
    }
}
