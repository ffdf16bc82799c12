//! Shared HTTP client for search backend requests.
//!
//! Provides a configured [`reqwest::Client`] with the request timeout and
//! User-Agent taken from [`ResearchConfig`].

use crate::config::ResearchConfig;
use crate::error::ResearchError;
use std::time::Duration;

/// User-Agent sent when the config does not override it.
pub const DEFAULT_USER_AGENT: &str = concat!("wikigen-research/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] configured for search API requests.
///
/// The client has:
/// - Timeout from config
/// - The configured User-Agent, or [`DEFAULT_USER_AGENT`]
/// - gzip decompression
///
/// # Errors
///
/// Returns [`ResearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &ResearchConfig) -> Result<reqwest::Client, ResearchError> {
    let ua = config
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| ResearchError::Http(format!("failed to build HTTP client: {e}")))
}
