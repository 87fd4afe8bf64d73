use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::draw::use_cases::spin::SpinRecipeUseCase;
use business::domain::draw::use_cases::spin_weekly::SpinWeeklyPlanUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recipes::dto::RecipeResponse;
use crate::api::spin::dto::{SpinRequest, WeeklyPlanResponse};
use crate::api::tags::ApiTags;

pub struct SpinApi {
    spin_use_case: Arc<dyn SpinRecipeUseCase>,
    spin_weekly_use_case: Arc<dyn SpinWeeklyPlanUseCase>,
}

impl SpinApi {
    pub fn new(
        spin_use_case: Arc<dyn SpinRecipeUseCase>,
        spin_weekly_use_case: Arc<dyn SpinWeeklyPlanUseCase>,
    ) -> Self {
        Self {
            spin_use_case,
            spin_weekly_use_case,
        }
    }
}

/// Spin API
///
/// Draws recipes from a pool previously loaded through `POST /pools`.
#[OpenApi]
impl SpinApi {
    /// Spin one recipe
    ///
    /// Picks a random recipe matching the time and calorie filters.
    #[oai(path = "/recipes/spin", method = "post", tag = "ApiTags::Spin")]
    async fn spin_recipe(&self, body: Json<SpinRequest>) -> SpinRecipeResponse {
        match self.spin_use_case.execute(body.0.into()).await {
            Ok(recipe) => SpinRecipeResponse::Ok(Json(recipe.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => SpinRecipeResponse::Unauthorized(json),
                    403 => SpinRecipeResponse::Forbidden(json),
                    404 => SpinRecipeResponse::NotFound(json),
                    422 => SpinRecipeResponse::UnprocessableEntity(json),
                    502 => SpinRecipeResponse::BadGateway(json),
                    503 => SpinRecipeResponse::ServiceUnavailable(json),
                    _ => SpinRecipeResponse::InternalError(json),
                }
            }
        }
    }

    /// Spin a weekly plan
    ///
    /// Draws seven distinct recipes, Monday to Sunday, and lists the
    /// ingredients they share.
    #[oai(path = "/weekly-plans/spin", method = "post", tag = "ApiTags::Spin")]
    async fn spin_weekly_plan(&self, body: Json<SpinRequest>) -> SpinWeeklyPlanResponse {
        match self.spin_weekly_use_case.execute(body.0.into()).await {
            Ok(plan) => SpinWeeklyPlanResponse::Ok(Json(plan.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => SpinWeeklyPlanResponse::Unauthorized(json),
                    403 => SpinWeeklyPlanResponse::Forbidden(json),
                    404 => SpinWeeklyPlanResponse::NotFound(json),
                    422 => SpinWeeklyPlanResponse::UnprocessableEntity(json),
                    502 => SpinWeeklyPlanResponse::BadGateway(json),
                    503 => SpinWeeklyPlanResponse::ServiceUnavailable(json),
                    _ => SpinWeeklyPlanResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SpinRecipeResponse {
    #[oai(status = 200)]
    Ok(Json<RecipeResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SpinWeeklyPlanResponse {
    #[oai(status = 200)]
    Ok(Json<WeeklyPlanResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
