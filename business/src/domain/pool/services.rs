use async_trait::async_trait;

use crate::domain::filter::query_params::{SearchQuery, TagQuery};
use crate::domain::recipe::raw::RawRecipe;

/// Why an upstream request produced no recipes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamError {
    #[error("NETWORK ERROR ({0})")]
    Network(String),
    #[error("INVALID API KEY (401)")]
    InvalidCredential,
    #[error("QUOTA EXCEEDED (402)")]
    QuotaExceeded,
    #[error("HTTP ERROR {0}")]
    Status(u16),
    #[error("MALFORMED RESPONSE ({0})")]
    Decode(String),
}

impl UpstreamError {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => UpstreamError::InvalidCredential,
            402 => UpstreamError::QuotaExceeded,
            other => UpstreamError::Status(other),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            UpstreamError::InvalidCredential => Some(401),
            UpstreamError::QuotaExceeded => Some(402),
            UpstreamError::Status(status) => Some(*status),
            _ => None,
        }
    }
}

/// Service port for the third-party recipe API.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// `false` when no API credential is configured; callers skip the network.
    fn has_credential(&self) -> bool;

    /// Tag-filtered random recipes (free tier strategy, no nutrition).
    async fn random(&self, query: &TagQuery, number: usize)
    -> Result<Vec<RawRecipe>, UpstreamError>;

    /// Diet/intolerance search with nutrition (pro tier strategy).
    async fn search(
        &self,
        query: &SearchQuery,
        number: usize,
    ) -> Result<Vec<RawRecipe>, UpstreamError>;
}
