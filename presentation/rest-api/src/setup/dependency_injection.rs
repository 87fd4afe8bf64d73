use std::sync::Arc;

use cache::pool_cache::InMemoryPoolCache;
use logger::TracingLogger;
use spoonacular::client::SpoonacularClient;
use spoonacular::recipe_source::SpoonacularRecipeSource;

use business::application::draw::spin::SpinRecipeUseCaseImpl;
use business::application::draw::spin_weekly::SpinWeeklyPlanUseCaseImpl;
use business::application::pool::fetcher::PoolFetcher;
use business::application::pool::load::LoadPoolUseCaseImpl;

use crate::config::pool_config::PoolConfig;
use crate::config::spoonacular_config::SpoonacularConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub pool_api: crate::api::pools::routes::PoolApi,
    pub spin_api: crate::api::spin::routes::SpinApi,
}

impl DependencyContainer {
    pub fn new(spoonacular_config: &SpoonacularConfig, pool_config: &PoolConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let client = SpoonacularClient::new(
            spoonacular_config.api_key.clone(),
            &spoonacular_config.base_url,
        );
        let live_source = client.api_key.is_some();
        let recipe_source = Arc::new(SpoonacularRecipeSource::new(client));
        let pool_cache = Arc::new(InMemoryPoolCache::new(pool_config.ttl()));

        let fetcher = Arc::new(PoolFetcher {
            source: recipe_source,
            logger: logger.clone(),
            pool_size: pool_config.pool_size,
        });

        // Use cases
        let load_pool_use_case = Arc::new(LoadPoolUseCaseImpl {
            fetcher,
            cache: pool_cache.clone(),
            logger: logger.clone(),
        });
        let spin_use_case = Arc::new(SpinRecipeUseCaseImpl {
            cache: pool_cache.clone(),
            logger: logger.clone(),
        });
        let spin_weekly_use_case = Arc::new(SpinWeeklyPlanUseCaseImpl {
            cache: pool_cache,
            logger,
        });

        Self {
            health_api: crate::api::health::routes::Api::new(live_source),
            pool_api: crate::api::pools::routes::PoolApi::new(load_pool_use_case),
            spin_api: crate::api::spin::routes::SpinApi::new(spin_use_case, spin_weekly_use_case),
        }
    }
}
