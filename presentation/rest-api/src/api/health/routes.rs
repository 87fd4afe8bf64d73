use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// "live" when a Spoonacular key is configured, "fixtures" otherwise
    pub recipe_source: String,
}

pub struct Api {
    live_source: bool,
}

impl Api {
    pub fn new(live_source: bool) -> Self {
        Self { live_source }
    }

    fn recipe_source(&self) -> &'static str {
        if self.live_source { "live" } else { "fixtures" }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns the current status of the service and where recipe pools come
    /// from.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            recipe_source: self.recipe_source().to_string(),
        })
    }
}
