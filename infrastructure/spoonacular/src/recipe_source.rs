use async_trait::async_trait;
use reqwest::Response;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use business::domain::filter::query_params::{SearchQuery, TagQuery};
use business::domain::pool::services::{RecipeSource, UpstreamError};
use business::domain::recipe::raw::RawRecipe;

use crate::client::SpoonacularClient;

/// Body of `GET /recipes/random`.
#[derive(Debug, Deserialize)]
pub struct RandomResponse {
    #[serde(default)]
    pub recipes: Vec<RawRecipe>,
}

/// Body of `GET /recipes/complexSearch`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<RawRecipe>,
    #[serde(default)]
    pub total_results: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub number: u32,
}

/// `RecipeSource` adapter for the Spoonacular REST API.
pub struct SpoonacularRecipeSource {
    client: SpoonacularClient,
}

impl SpoonacularRecipeSource {
    pub fn new(client: SpoonacularClient) -> Self {
        Self { client }
    }

    fn api_key(&self) -> Result<&str, UpstreamError> {
        self.client
            .api_key
            .as_deref()
            .ok_or(UpstreamError::InvalidCredential)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        url: String,
        params: &[(&str, String)],
    ) -> Result<T, UpstreamError> {
        let response = self
            .client
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, UpstreamError> {
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::from_status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}

#[async_trait]
impl RecipeSource for SpoonacularRecipeSource {
    fn has_credential(&self) -> bool {
        self.client.api_key.is_some()
    }

    async fn random(
        &self,
        query: &TagQuery,
        number: usize,
    ) -> Result<Vec<RawRecipe>, UpstreamError> {
        let mut params = vec![
            ("apiKey", self.api_key()?.to_string()),
            ("number", number.to_string()),
            ("include-tags", query.include_tags.clone()),
        ];
        if !query.exclude_tags.is_empty() {
            params.push(("exclude-tags", query.exclude_tags.clone()));
        }

        let body: RandomResponse = self.get(self.client.random_url(), &params).await?;
        Ok(body.recipes)
    }

    async fn search(
        &self,
        query: &SearchQuery,
        number: usize,
    ) -> Result<Vec<RawRecipe>, UpstreamError> {
        let mut params = vec![
            ("apiKey", self.api_key()?.to_string()),
            ("number", number.to_string()),
            ("sort", "random".to_string()),
            ("addRecipeInformation", "true".to_string()),
            ("addRecipeNutrition", "true".to_string()),
            ("type", query.dish_type.clone()),
        ];
        if !query.diet.is_empty() {
            params.push(("diet", query.diet.clone()));
        }
        if !query.intolerances.is_empty() {
            params.push(("intolerances", query.intolerances.clone()));
        }

        let body: SearchResponse = self.get(self.client.complex_search_url(), &params).await?;
        Ok(body.results)
    }
}
