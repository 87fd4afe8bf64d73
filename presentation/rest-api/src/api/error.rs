use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body shared by every endpoint.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error code, e.g. "EMPTY_POOL"
    pub name: String,
    /// Message safe to show to the user
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
