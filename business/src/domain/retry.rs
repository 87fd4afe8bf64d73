use std::time::Duration;

use super::errors::{ApiError, ApiErrorCode, Failure, classify};

/// Attempt ceiling for read operations.
pub const READ_MAX_ATTEMPTS: u32 = 3;
/// Attempt ceiling for write operations.
pub const WRITE_MAX_ATTEMPTS: u32 = 1;

const BASE_DELAY_MS: u64 = 1_000;
const MAX_DELAY_MS: u64 = 10_000;

const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";

/// Auth, permission and not-found failures are never retried.
pub fn is_retryable(code: ApiErrorCode) -> bool {
    !matches!(
        code,
        ApiErrorCode::AuthError | ApiErrorCode::PermissionError | ApiErrorCode::NotFoundError
    )
}

/// Whether attempt number `attempt` (1-based) may run after `failure`.
pub fn retry_decision(attempt: u32, failure: &Failure, max_attempts: u32) -> bool {
    if !is_retryable(classify(failure).code) {
        return false;
    }
    attempt <= max_attempts
}

/// Exponential backoff: 1s, 2s, 4s, 8s, then capped at 10s.
pub fn backoff_delay_ms(attempt: u32) -> u64 {
    let exponent = attempt.max(1) - 1;
    2u64.checked_pow(exponent)
        .and_then(|factor| factor.checked_mul(BASE_DELAY_MS))
        .map_or(MAX_DELAY_MS, |delay| delay.min(MAX_DELAY_MS))
}

pub fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_millis(backoff_delay_ms(attempt))
}

pub fn to_user_message(code: ApiErrorCode) -> &'static str {
    match code {
        ApiErrorCode::AuthError => "Please sign in again to continue.",
        ApiErrorCode::PermissionError => "You don't have permission to do that.",
        ApiErrorCode::NetworkError => "Check your connection and try again.",
        ApiErrorCode::ServerError => "Something went wrong on our end. Try again in a moment.",
        ApiErrorCode::NotFoundError => "That item could not be found.",
        ApiErrorCode::EmptyPool | ApiErrorCode::NoMatchingRecipes | ApiErrorCode::UnknownError => {
            GENERIC_MESSAGE
        }
    }
}

/// Message to show for an error. Draw failures carry their own wording,
/// which is kept over the generic mapping.
pub fn user_message(err: &ApiError) -> String {
    match err.code {
        ApiErrorCode::EmptyPool | ApiErrorCode::NoMatchingRecipes if !err.message.is_empty() => {
            err.message.clone()
        }
        code => to_user_message(code).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(code: ApiErrorCode) -> Failure {
        Failure::Api(ApiError::new(code, "test"))
    }

    #[test]
    fn should_not_retry_auth_permission_or_not_found() {
        assert!(!is_retryable(ApiErrorCode::AuthError));
        assert!(!is_retryable(ApiErrorCode::PermissionError));
        assert!(!is_retryable(ApiErrorCode::NotFoundError));
    }

    #[test]
    fn should_treat_everything_else_as_retryable() {
        for code in [
            ApiErrorCode::NetworkError,
            ApiErrorCode::ServerError,
            ApiErrorCode::UnknownError,
            ApiErrorCode::EmptyPool,
            ApiErrorCode::NoMatchingRecipes,
        ] {
            assert!(is_retryable(code), "{code}");
        }
    }

    #[test]
    fn should_decide_retries_against_ceiling() {
        assert!(!retry_decision(1, &typed(ApiErrorCode::AuthError), 3));
        assert!(retry_decision(3, &typed(ApiErrorCode::NetworkError), 3));
        assert!(!retry_decision(4, &typed(ApiErrorCode::NetworkError), 3));
    }

    #[test]
    fn should_classify_before_deciding() {
        let failure = Failure::Backend {
            code: None,
            status: Some(403),
            message: None,
        };
        assert!(!retry_decision(1, &failure, READ_MAX_ATTEMPTS));
        assert!(retry_decision(1, &Failure::Network("offline".to_string()), WRITE_MAX_ATTEMPTS));
        assert!(!retry_decision(2, &Failure::Network("offline".to_string()), WRITE_MAX_ATTEMPTS));
    }

    #[test]
    fn should_back_off_exponentially_with_cap() {
        let delays: Vec<u64> = (1..=5).map(backoff_delay_ms).collect();
        assert_eq!(delays, vec![1000, 2000, 4000, 8000, 10000]);
    }

    #[test]
    fn should_saturate_for_huge_attempts() {
        assert_eq!(backoff_delay_ms(64), 10_000);
        assert_eq!(backoff_delay_ms(u32::MAX), 10_000);
        assert_eq!(backoff_delay_ms(0), 1_000);
        assert_eq!(backoff_delay(2), Duration::from_secs(2));
    }

    #[test]
    fn should_map_codes_to_user_messages() {
        assert_eq!(
            to_user_message(ApiErrorCode::AuthError),
            "Please sign in again to continue."
        );
        assert_eq!(
            to_user_message(ApiErrorCode::EmptyPool),
            to_user_message(ApiErrorCode::UnknownError)
        );
    }

    #[test]
    fn should_prefer_draw_messages() {
        let empty = ApiError::empty_pool();
        assert_eq!(user_message(&empty), empty.message);

        let server = ApiError::new(ApiErrorCode::ServerError, "pg: connection reset");
        assert_eq!(
            user_message(&server),
            "Something went wrong on our end. Try again in a moment."
        );
    }
}
