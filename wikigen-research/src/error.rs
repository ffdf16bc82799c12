//! Error types for the wikigen-research crate.
//!
//! Messages are stable `"kind: detail"` strings. API keys never appear in
//! error messages.

/// Errors that can occur while gathering research evidence.
///
/// Only the search backends and configuration validation produce these.
/// The orchestrator swallows per-query errors, so [`crate::research`]
/// itself never returns one of them for a failed query.
#[derive(Debug, thiserror::Error)]
pub enum ResearchError {
    /// An HTTP request to the search backend failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The search backend answered with a body that could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// A search request timed out.
    #[error("search timed out: {0}")]
    Timeout(String),

    /// Invalid research configuration or unsupported category.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for wikigen-research results.
pub type Result<T> = std::result::Result<T, ResearchError>;

impl From<reqwest::Error> for ResearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_http() {
        let err = ResearchError::Http("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn display_parse() {
        let err = ResearchError::Parse("missing field `url`".into());
        assert_eq!(err.to_string(), "parse error: missing field `url`");
    }

    #[test]
    fn display_timeout() {
        let err = ResearchError::Timeout("exceeded 30s limit".into());
        assert_eq!(err.to_string(), "search timed out: exceeded 30s limit");
    }

    #[test]
    fn display_config() {
        let err = ResearchError::Config("unsupported category: planet".into());
        assert_eq!(err.to_string(), "config error: unsupported category: planet");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResearchError>();
    }
}
