use async_trait::async_trait;

use crate::domain::draw::model::DrawRequest;
use crate::domain::errors::ApiError;
use crate::domain::recipe::model::Recipe;

#[async_trait]
pub trait SpinRecipeUseCase: Send + Sync {
    async fn execute(&self, request: DrawRequest) -> Result<Recipe, ApiError>;
}
