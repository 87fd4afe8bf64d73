use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::{ApiError, ApiErrorCode};
use business::domain::retry::user_message;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

fn status_for(code: ApiErrorCode) -> StatusCode {
    match code {
        ApiErrorCode::EmptyPool => StatusCode::SERVICE_UNAVAILABLE,
        ApiErrorCode::NoMatchingRecipes => StatusCode::UNPROCESSABLE_ENTITY,
        ApiErrorCode::AuthError => StatusCode::UNAUTHORIZED,
        ApiErrorCode::PermissionError => StatusCode::FORBIDDEN,
        ApiErrorCode::NotFoundError => StatusCode::NOT_FOUND,
        ApiErrorCode::NetworkError | ApiErrorCode::ServerError => StatusCode::BAD_GATEWAY,
        ApiErrorCode::UnknownError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoErrorResponse for ApiError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        (
            status_for(self.code),
            Json(ErrorResponse {
                name: self.code.to_string(),
                message: user_message(&self),
            }),
        )
    }
}
