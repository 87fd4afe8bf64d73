use std::sync::Arc;

use crate::domain::filter::predicates::ingredient_exclusion_passes;
use crate::domain::filter::query_params::{UpstreamQuery, build_upstream_query};
use crate::domain::logger::Logger;
use crate::domain::pool::model::Pool;
use crate::domain::pool::services::{RecipeSource, UpstreamError};
use crate::domain::preferences::value_objects::{DietaryFilter, Tier};
use crate::domain::recipe::canonicalize::canonicalize;
use crate::domain::recipe::fixtures::fixture_recipes;
use crate::domain::recipe::raw::RawRecipe;

/// Builds recipe pools from the upstream API, falling back to the bundled
/// fixtures whenever the upstream cannot deliver. Never fails.
pub struct PoolFetcher {
    pub source: Arc<dyn RecipeSource>,
    pub logger: Arc<dyn Logger>,
    pub pool_size: usize,
}

impl PoolFetcher {
    pub async fn fetch_pool(&self, dietary: &[DietaryFilter], tier: Tier) -> Pool {
        self.fetch(dietary, tier).await
    }

    pub async fn fetch_pool_for_free_tier(&self, dietary: &[DietaryFilter]) -> Pool {
        self.fetch(dietary, Tier::Free).await
    }

    pub async fn fetch_pool_for_pro_tier(&self, dietary: &[DietaryFilter]) -> Pool {
        self.fetch(dietary, Tier::Pro).await
    }

    async fn fetch(&self, dietary: &[DietaryFilter], tier: Tier) -> Pool {
        if !self.source.has_credential() {
            self.logger
                .info("No Spoonacular API key configured, using fixture recipes");
            return self.fixture_pool(dietary, tier);
        }

        let result = match build_upstream_query(dietary, tier) {
            UpstreamQuery::Tags(query) => {
                self.logger.debug(&format!(
                    "Fetching random recipes (include-tags: {}, exclude-tags: {})",
                    query.include_tags, query.exclude_tags
                ));
                self.source.random(&query, self.pool_size).await
            }
            UpstreamQuery::Search(query) => {
                self.logger.debug(&format!(
                    "Searching recipes (diet: {}, intolerances: {})",
                    query.diet, query.intolerances
                ));
                self.source.search(&query, self.pool_size).await
            }
        };
        self.from_upstream(result, dietary, tier)
    }

    /// The bundled recipes run through the live pipeline.
    pub fn fixture_pool(&self, dietary: &[DietaryFilter], tier: Tier) -> Pool {
        build_pool(fixture_recipes(), dietary, tier, self.pool_size)
    }

    fn from_upstream(
        &self,
        result: Result<Vec<RawRecipe>, UpstreamError>,
        dietary: &[DietaryFilter],
        tier: Tier,
    ) -> Pool {
        let raws = match result {
            Ok(raws) => raws,
            Err(err) => {
                self.logger.warn(&format!(
                    "Spoonacular request failed: {}, using fixture recipes",
                    err
                ));
                return self.fixture_pool(dietary, tier);
            }
        };

        let received = raws.len();
        let pool = build_pool(&raws, dietary, tier, self.pool_size);
        if pool.is_empty() {
            self.logger.warn(&format!(
                "Spoonacular returned no usable recipes ({} received), using fixture recipes",
                received
            ));
            return self.fixture_pool(dietary, tier);
        }

        self.logger.info(&format!(
            "Loaded {} recipes from Spoonacular ({} received)",
            pool.len(),
            received
        ));
        pool
    }
}

/// Shared by the live and the fixture path. Free tier recipes lose their
/// nutrition before canonicalization.
fn build_pool(raws: &[RawRecipe], dietary: &[DietaryFilter], tier: Tier, pool_size: usize) -> Pool {
    raws.iter()
        .filter(|raw| ingredient_exclusion_passes(raw, dietary))
        .take(pool_size)
        .map(|raw| match tier {
            Tier::Pro => canonicalize(raw),
            Tier::Free => canonicalize(&RawRecipe {
                nutrition: None,
                ..raw.clone()
            }),
        })
        .collect::<Vec<_>>()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::query_params::{SearchQuery, TagQuery};
    use crate::domain::recipe::model::CALORIES_UNKNOWN;
    use crate::domain::recipe::raw::{RawIngredient, RawNutrient, RawNutrition};
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub Source {}

        #[async_trait]
        impl RecipeSource for Source {
            fn has_credential(&self) -> bool;
            async fn random(&self, query: &TagQuery, number: usize) -> Result<Vec<RawRecipe>, UpstreamError>;
            async fn search(&self, query: &SearchQuery, number: usize) -> Result<Vec<RawRecipe>, UpstreamError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn fetcher(source: MockSource) -> PoolFetcher {
        PoolFetcher {
            source: Arc::new(source),
            logger: mock_logger(),
            pool_size: 50,
        }
    }

    fn live_recipe(id: i64, ingredient: &str) -> RawRecipe {
        RawRecipe {
            id,
            title: format!("Live {}", id),
            ready_in_minutes: 20,
            servings: 2,
            extended_ingredients: vec![RawIngredient {
                id: 1,
                name: ingredient.to_string(),
                amount: 1.0,
                unit: "cup".to_string(),
                original: format!("1 cup {}", ingredient),
            }],
            nutrition: Some(RawNutrition {
                nutrients: vec![RawNutrient {
                    name: "Calories".to_string(),
                    amount: 512.4,
                    unit: "kcal".to_string(),
                }],
            }),
            ..RawRecipe::default()
        }
    }

    fn pool_ids(pool: &Pool) -> Vec<String> {
        pool.recipes().iter().map(|r| r.id.clone()).collect()
    }

    #[tokio::test]
    async fn should_use_fixtures_without_credential() {
        // Arrange
        let mut source = MockSource::new();
        source.expect_has_credential().returning(|| false);
        source.expect_random().never();
        source.expect_search().never();
        let fetcher = fetcher(source);

        // Act
        let pool = fetcher.fetch_pool(&[], Tier::Free).await;

        // Assert
        assert_eq!(pool.len(), fixture_recipes().len());
        assert!(pool.recipes().iter().all(|r| r.calories == CALORIES_UNKNOWN));
    }

    #[tokio::test]
    async fn should_fall_back_to_fixtures_on_quota_exceeded() {
        let mut source = MockSource::new();
        source.expect_has_credential().returning(|| true);
        source
            .expect_random()
            .times(1)
            .returning(|_, _| Err(UpstreamError::QuotaExceeded));

        let pool = fetcher(source).fetch_pool_for_free_tier(&[]).await;

        assert!(!pool.is_empty());
        assert!(pool.recipes().iter().all(|r| r.calories == CALORIES_UNKNOWN));
    }

    #[tokio::test]
    async fn should_fall_back_to_fixtures_on_network_error() {
        let mut source = MockSource::new();
        source.expect_has_credential().returning(|| true);
        source
            .expect_search()
            .times(1)
            .returning(|_, _| Err(UpstreamError::Network("connection refused".to_string())));

        let pool = fetcher(source).fetch_pool_for_pro_tier(&[]).await;

        assert_eq!(pool.len(), fixture_recipes().len());
        // pro keeps fixture nutrition
        assert!(pool.recipes().iter().all(|r| r.calories != CALORIES_UNKNOWN));
    }

    #[tokio::test]
    async fn should_fall_back_when_every_result_is_excluded() {
        let mut source = MockSource::new();
        source.expect_has_credential().returning(|| true);
        source
            .expect_random()
            .returning(|_, _| Ok(vec![live_recipe(1, "pork belly"), live_recipe(2, "bacon")]));

        let pool = fetcher(source)
            .fetch_pool_for_free_tier(&[DietaryFilter::NoPork])
            .await;

        let ids = pool_ids(&pool);
        assert!(!ids.is_empty());
        assert!(!ids.contains(&"1".to_string()));
        assert!(!ids.contains(&"2".to_string()));
    }

    #[tokio::test]
    async fn should_exclude_ingredients_from_live_results() {
        let mut source = MockSource::new();
        source.expect_has_credential().returning(|| true);
        source.expect_random().returning(|_, _| {
            Ok(vec![
                live_recipe(1, "Ground Pork"),
                live_recipe(2, "chickpeas"),
            ])
        });

        let pool = fetcher(source)
            .fetch_pool_for_free_tier(&[DietaryFilter::NoPork])
            .await;

        assert_eq!(pool_ids(&pool), vec!["2".to_string()]);
    }

    #[tokio::test]
    async fn should_strip_calories_for_free_tier_only() {
        let mut free = MockSource::new();
        free.expect_has_credential().returning(|| true);
        free.expect_random()
            .returning(|_, _| Ok(vec![live_recipe(1, "rice")]));
        let mut pro = MockSource::new();
        pro.expect_has_credential().returning(|| true);
        pro.expect_search()
            .returning(|_, _| Ok(vec![live_recipe(1, "rice")]));

        let free_pool = fetcher(free).fetch_pool(&[], Tier::Free).await;
        let pro_pool = fetcher(pro).fetch_pool(&[], Tier::Pro).await;

        assert_eq!(free_pool.recipes()[0].calories, CALORIES_UNKNOWN);
        assert_eq!(pro_pool.recipes()[0].calories, "512 cal");
    }

    #[tokio::test]
    async fn should_request_pool_size_and_bound_results() {
        let mut source = MockSource::new();
        source.expect_has_credential().returning(|| true);
        source
            .expect_search()
            .withf(|query, number| query.diet == "vegan" && *number == 3)
            .returning(|_, _| Ok((1..=5).map(|id| live_recipe(id, "tofu")).collect()));
        let fetcher = PoolFetcher {
            source: Arc::new(source),
            logger: mock_logger(),
            pool_size: 3,
        };

        let pool = fetcher
            .fetch_pool_for_pro_tier(&[DietaryFilter::Vegan])
            .await;

        assert_eq!(pool.len(), 3);
    }

    #[tokio::test]
    async fn should_log_upstream_status_label() {
        let mut source = MockSource::new();
        source.expect_has_credential().returning(|| true);
        source
            .expect_random()
            .returning(|_, _| Err(UpstreamError::from_status(401)));
        let mut logger = MockLog::new();
        logger.expect_debug().returning(|_| ());
        logger.expect_info().returning(|_| ());
        logger
            .expect_warn()
            .withf(|message| message.contains("INVALID API KEY (401)"))
            .times(1)
            .returning(|_| ());
        let fetcher = PoolFetcher {
            source: Arc::new(source),
            logger: Arc::new(logger),
            pool_size: 50,
        };

        let pool = fetcher.fetch_pool_for_free_tier(&[]).await;

        assert!(!pool.is_empty());
    }

    #[test]
    fn should_apply_exclusion_to_fixture_pool() {
        let fetcher = fetcher(MockSource::new());

        let pool = fetcher.fixture_pool(&[DietaryFilter::NoPork], Tier::Free);

        assert_eq!(pool.len(), fixture_recipes().len() - 3);
    }
}
