use serde::{Deserialize, Serialize};

use crate::domain::pool::services::UpstreamError;

/// Backend code for "no rows returned" on single-row reads.
pub const BACKEND_NOT_FOUND_CODE: &str = "PGRST116";

/// Closed error taxonomy shared by every layer.
/// Use code-style identifiers for all variants for i18n compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorCode {
    AuthError,
    PermissionError,
    NotFoundError,
    NetworkError,
    ServerError,
    EmptyPool,
    NoMatchingRecipes,
    UnknownError,
}

impl ApiErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiErrorCode::AuthError => "AUTH_ERROR",
            ApiErrorCode::PermissionError => "PERMISSION_ERROR",
            ApiErrorCode::NotFoundError => "NOT_FOUND_ERROR",
            ApiErrorCode::NetworkError => "NETWORK_ERROR",
            ApiErrorCode::ServerError => "SERVER_ERROR",
            ApiErrorCode::EmptyPool => "EMPTY_POOL",
            ApiErrorCode::NoMatchingRecipes => "NO_MATCHING_RECIPES",
            ApiErrorCode::UnknownError => "UNKNOWN_ERROR",
        }
    }
}

impl std::fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Typed failure. Once constructed it is passed along unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub status: Option<u16>,
}

impl ApiError {
    pub fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status: None,
        }
    }

    pub fn with_status(code: ApiErrorCode, message: impl Into<String>, status: u16) -> Self {
        Self {
            code,
            message: message.into(),
            status: Some(status),
        }
    }

    pub fn empty_pool() -> Self {
        Self::new(
            ApiErrorCode::EmptyPool,
            "Recipes are still loading. Try again in a moment.",
        )
    }

    pub fn no_matching_recipes() -> Self {
        Self::new(
            ApiErrorCode::NoMatchingRecipes,
            "No recipes match your filters. Try loosening them.",
        )
    }

    pub fn not_enough_for_week(available: usize) -> Self {
        Self::new(
            ApiErrorCode::NoMatchingRecipes,
            format!(
                "Only {} recipes match your filters, not enough for a 7-day plan. Try loosening them.",
                available
            ),
        )
    }
}

/// Anything a caller may hand to [`classify`].
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    /// Already classified.
    Api(ApiError),
    /// The request could not be sent or no response arrived.
    Network(String),
    /// Error object returned by the data backend.
    Backend {
        code: Option<String>,
        status: Option<u16>,
        message: Option<String>,
    },
    /// Plain error with a message only.
    Message(String),
    /// Nothing usable at all.
    Unknown,
}

impl From<ApiError> for Failure {
    fn from(err: ApiError) -> Self {
        Failure::Api(err)
    }
}

impl From<UpstreamError> for Failure {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Network(message) => Failure::Network(message),
            other => Failure::Backend {
                code: None,
                status: other.status(),
                message: Some(other.to_string()),
            },
        }
    }
}

/// Maps a failure onto the taxonomy. Total; classifying an [`ApiError`]
/// returns it unchanged.
pub fn classify(failure: &Failure) -> ApiError {
    match failure {
        Failure::Api(err) => err.clone(),
        Failure::Network(message) => ApiError::new(ApiErrorCode::NetworkError, message.clone()),
        Failure::Backend {
            code,
            status,
            message,
        } => {
            if code.as_deref() == Some(BACKEND_NOT_FOUND_CODE) {
                return ApiError::new(
                    ApiErrorCode::NotFoundError,
                    message.clone().unwrap_or_else(|| "Not found".to_string()),
                );
            }

            let message = message
                .clone()
                .unwrap_or_else(|| "An error occurred".to_string());
            match status {
                Some(401) => ApiError::with_status(ApiErrorCode::AuthError, message, 401),
                Some(403) => ApiError::with_status(ApiErrorCode::PermissionError, message, 403),
                Some(status) if *status >= 500 => {
                    ApiError::with_status(ApiErrorCode::ServerError, message, *status)
                }
                _ => ApiError::new(ApiErrorCode::UnknownError, message),
            }
        }
        Failure::Message(message) => ApiError::new(ApiErrorCode::UnknownError, message.clone()),
        Failure::Unknown => ApiError::new(ApiErrorCode::UnknownError, "An unknown error occurred"),
    }
}
