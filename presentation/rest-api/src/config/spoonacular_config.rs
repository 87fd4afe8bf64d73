use std::env;

use spoonacular::client::DEFAULT_BASE_URL;

/// Configuration for Spoonacular API access.
pub struct SpoonacularConfig {
    /// `None` runs the service on the bundled fixture recipes only.
    pub api_key: Option<String>,
    pub base_url: String,
}

impl SpoonacularConfig {
    /// Environment variables:
    /// - SPOONACULAR_API_KEY: API key (optional)
    /// - SPOONACULAR_BASE_URL: API root (default: "https://api.spoonacular.com")
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("SPOONACULAR_API_KEY").ok(),
            env::var("SPOONACULAR_BASE_URL").ok(),
        )
    }

    fn from_values(api_key: Option<String>, base_url: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: base_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}
