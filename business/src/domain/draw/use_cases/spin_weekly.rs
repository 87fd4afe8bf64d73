use async_trait::async_trait;

use crate::domain::draw::model::{DrawRequest, WeeklyPlan};
use crate::domain::errors::ApiError;

#[async_trait]
pub trait SpinWeeklyPlanUseCase: Send + Sync {
    async fn execute(&self, request: DrawRequest) -> Result<WeeklyPlan, ApiError>;
}
