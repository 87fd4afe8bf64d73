use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::draw::engine::draw_week;
use crate::domain::draw::model::{DrawRequest, WeeklyPlan};
use crate::domain::draw::use_cases::spin_weekly::SpinWeeklyPlanUseCase;
use crate::domain::errors::ApiError;
use crate::domain::logger::Logger;
use crate::domain::pool::cache::PoolCache;
use crate::domain::pool::fingerprint::build_fingerprint;

pub struct SpinWeeklyPlanUseCaseImpl {
    pub cache: Arc<dyn PoolCache>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SpinWeeklyPlanUseCase for SpinWeeklyPlanUseCaseImpl {
    async fn execute(&self, request: DrawRequest) -> Result<WeeklyPlan, ApiError> {
        let fingerprint = build_fingerprint(&request.dietary, request.tier);
        let pool = self.cache.get(&fingerprint);

        let plan = draw_week(pool.as_ref(), &request, &mut rand::rng()).inspect_err(|err| {
            self.logger.warn(&format!(
                "Weekly spin failed for pool {}: {}",
                fingerprint, err
            ))
        })?;

        self.logger.info(&format!(
            "Drew weekly plan {} from pool {} ({} shared ingredients)",
            plan.id,
            fingerprint,
            plan.shared_ingredients.len()
        ));
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ApiErrorCode;
    use crate::domain::pool::fingerprint::Fingerprint;
    use crate::domain::pool::model::Pool;
    use crate::domain::preferences::value_objects::{CalorieFilter, Tier, TimeFilter};
    use crate::domain::recipe::canonicalize::canonicalize;
    use crate::domain::recipe::fixtures::fixture_recipes;
    use mockall::mock;

    mock! {
        pub Cache {}

        impl PoolCache for Cache {
            fn get(&self, fingerprint: &Fingerprint) -> Option<Pool>;
            fn set(&self, fingerprint: Fingerprint, pool: Pool);
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

    fn use_case(pool: Option<Pool>) -> SpinWeeklyPlanUseCaseImpl {
        let mut cache = MockCache::new();
        cache.expect_get().returning(move |_| pool.clone());
        SpinWeeklyPlanUseCaseImpl {
            cache: Arc::new(cache),
            logger: mock_logger(),
        }
    }

    fn request(calories: CalorieFilter) -> DrawRequest {
        DrawRequest {
            dietary: vec![],
            time: TimeFilter::Any,
            calories,
            tier: Tier::Pro,
        }
    }

    fn fixture_pool() -> Pool {
        fixture_recipes().iter().map(canonicalize).collect::<Vec<_>>().into()
    }

    #[tokio::test]
    async fn should_draw_seven_distinct_days() {
        let plan = use_case(Some(fixture_pool()))
            .execute(request(CalorieFilter::Moderate))
            .await
            .unwrap();

        assert_eq!(plan.days.len(), 7);
        assert_eq!(plan.days[0].day, "Monday");
        assert_eq!(plan.days[6].day, "Sunday");
        let mut ids: Vec<&str> = plan.days.iter().map(|d| d.recipe.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 7);
    }

    #[tokio::test]
    async fn should_refuse_when_too_few_recipes_match() {
        // Only one fixture recipe is above 700 calories
        let err = use_case(Some(fixture_pool()))
            .execute(request(CalorieFilter::Hearty))
            .await
            .unwrap_err();

        assert_eq!(err.code, ApiErrorCode::NoMatchingRecipes);
    }

    #[tokio::test]
    async fn should_report_empty_pool_on_cache_miss() {
        let err = use_case(None)
            .execute(request(CalorieFilter::Moderate))
            .await
            .unwrap_err();

        assert_eq!(err.code, ApiErrorCode::EmptyPool);
    }
}
