//! Research configuration with sensible defaults.
//!
//! [`ResearchConfig`] controls how many results each query asks for, how much
//! page text is requested, how large the knowledge base may grow, and request
//! behaviour of the HTTP backend.

use serde::{Deserialize, Serialize};

use crate::error::ResearchError;

/// Default number of references included in the knowledge base.
pub const DEFAULT_KNOWLEDGE_BASE_LIMIT: usize = 15;

/// Hard upper bound on knowledge base entries, whatever the config says.
pub const MAX_KNOWLEDGE_BASE_ENTRIES: usize = 15;

/// Configuration for a research run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchConfig {
    /// Number of results requested from the backend for each planned query.
    pub results_per_query: usize,
    /// Maximum characters of page text requested per result.
    pub max_characters: usize,
    /// Number of top-ranked references rendered into the knowledge base.
    pub knowledge_base_limit: usize,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// How long to cache per-query results in seconds. 0 disables caching.
    pub cache_ttl_seconds: u64,
    /// Custom User-Agent. `None` uses the crate's own identifier.
    pub user_agent: Option<String>,
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            results_per_query: 10,
            max_characters: 3000,
            knowledge_base_limit: DEFAULT_KNOWLEDGE_BASE_LIMIT,
            timeout_seconds: 30,
            cache_ttl_seconds: 600,
            user_agent: None,
        }
    }
}

impl ResearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `results_per_query` must be greater than 0
    /// - `knowledge_base_limit` must be in `1..=MAX_KNOWLEDGE_BASE_ENTRIES`
    /// - `timeout_seconds` must be greater than 0
    pub fn validate(&self) -> Result<(), ResearchError> {
        if self.results_per_query == 0 {
            return Err(ResearchError::Config(
                "results_per_query must be greater than 0".into(),
            ));
        }
        if self.knowledge_base_limit == 0 {
            return Err(ResearchError::Config(
                "knowledge_base_limit must be greater than 0".into(),
            ));
        }
        if self.knowledge_base_limit > MAX_KNOWLEDGE_BASE_ENTRIES {
            return Err(ResearchError::Config(format!(
                "knowledge_base_limit must be at most {MAX_KNOWLEDGE_BASE_ENTRIES}"
            )));
        }
        if self.timeout_seconds == 0 {
            return Err(ResearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
