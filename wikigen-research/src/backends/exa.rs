//! Exa-style neural search API backend.
//!
//! Sends `POST {base_url}/search` with the API key in the `x-api-key`
//! header and asks for page text alongside each hit, so one request yields
//! title, URL, text and publication date.

use serde::{Deserialize, Serialize};

use crate::backend::SearchBackend;
use crate::config::ResearchConfig;
use crate::error::ResearchError;
use crate::http;
use crate::types::RawResult;

/// Default public endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.exa.ai";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest<'a> {
    query: &'a str,
    num_results: usize,
    #[serde(rename = "type")]
    search_type: &'a str,
    contents: Contents,
}

#[derive(Serialize)]
struct Contents {
    text: TextOptions,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TextOptions {
    max_characters: usize,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<RawResult>,
}

/// HTTP backend for an Exa-compatible search API.
#[derive(Debug, Clone)]
pub struct ExaBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    num_results: usize,
    max_characters: usize,
}

impl ExaBackend {
    /// Create a backend against [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns [`ResearchError::Config`] for an empty API key, or
    /// [`ResearchError::Http`] if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>, config: &ResearchConfig) -> Result<Self, ResearchError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ResearchError::Config("search API key is empty".into()));
        }
        Ok(Self {
            client: http::build_client(config)?,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            num_results: config.results_per_query,
            max_characters: config.max_characters,
        })
    }

    /// Point the backend at a different endpoint (trailing `/` ignored).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

impl SearchBackend for ExaBackend {
    async fn search(&self, query: &str) -> Result<Vec<RawResult>, ResearchError> {
        tracing::trace!(query, "search API request");

        let body = SearchRequest {
            query,
            num_results: self.num_results,
            search_type: "auto",
            contents: Contents {
                text: TextOptions {
                    max_characters: self.max_characters,
                },
            },
        };

        let response = self
            .client
            .post(format!("{}/search", self.base_url))
            .header("x-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResearchError::Http(format!(
                "search API returned status {}",
                status.as_u16()
            )));
        }

        let text = response.text().await?;
        tracing::trace!(bytes = text.len(), "search API response received");

        parse_search_response(&text)
    }

    fn name(&self) -> &str {
        "exa"
    }
}

/// Decode a search API response body.
///
/// Records without a URL are dropped; they cannot be identified or cited.
pub(crate) fn parse_search_response(body: &str) -> Result<Vec<RawResult>, ResearchError> {
    let response: SearchResponse = serde_json::from_str(body)
        .map_err(|e| ResearchError::Parse(format!("invalid search response: {e}")))?;
    Ok(response
        .results
        .into_iter()
        .filter(|r| !r.url.trim().is_empty())
        .collect())
}
