use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";

/// Shared Spoonacular HTTP client configuration.
pub struct SpoonacularClient {
    pub client: Client,
    /// `None` means fixture-only mode.
    pub api_key: Option<String>,
    pub base_url: String,
}

impl SpoonacularClient {
    pub fn new(api_key: Option<String>, base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key: api_key
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the random recipes endpoint URL.
    pub fn random_url(&self) -> String {
        format!("{}/recipes/random", self.base_url)
    }

    /// Returns the complex search endpoint URL.
    pub fn complex_search_url(&self) -> String {
        format!("{}/recipes/complexSearch", self.base_url)
    }
}
