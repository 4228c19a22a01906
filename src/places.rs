//! Place-autocomplete HTTP adapter.
//!
//! Turns a partial search query into destination suggestions. The core
//! never calls this itself; the screen fetches predictions here, lets
//! the rider pick one, and hands the resolved destination to the
//! planner.

use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct PlacesConfig {
    pub base_url: String,
    pub api_key: String,
    /// Response language, e.g. "tr".
    pub language: String,
    /// Country restriction, e.g. "tr".
    pub country: String,
    pub timeout_secs: u64,
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            base_url: "https://maps.googleapis.com/maps/api".to_string(),
            api_key: String::new(),
            language: "tr".to_string(),
            country: "tr".to_string(),
            timeout_secs: 10,
        }
    }
}

/// One autocomplete suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlacePrediction {
    pub place_id: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
struct AutocompleteResponse {
    #[serde(default)]
    predictions: Vec<PlacePrediction>,
}

#[derive(Debug, Clone)]
pub struct PlacesClient {
    config: PlacesConfig,
    client: reqwest::blocking::Client,
}

impl PlacesClient {
    pub fn new(config: PlacesConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Suggests destinations matching a partial query.
    ///
    /// Queries of two characters or fewer return no suggestions without
    /// touching the network.
    pub fn autocomplete(&self, query: &str) -> Result<Vec<PlacePrediction>, reqwest::Error> {
        if query.chars().count() <= 2 {
            return Ok(Vec::new());
        }

        let url = format!("{}/place/autocomplete/json", self.config.base_url);
        let components = format!("country:{}", self.config.country);
        debug!(query, "requesting place autocomplete");

        self.client
            .get(url)
            .query(&[
                ("input", query),
                ("key", self.config.api_key.as_str()),
                ("language", self.config.language.as_str()),
                ("components", components.as_str()),
            ])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<AutocompleteResponse>())
            .map(|body| body.predictions)
    }
}
