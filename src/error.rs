//! Error types for the wikigen article pipeline.

use wikigen_research::ResearchError;

use crate::generation::GenerationError;

/// Top-level error type for article generation runs.
///
/// Evidence-gathering problems never reach this type for individual query
/// failures; those are absorbed inside research. What does arrive here is
/// fatal to the run.
#[derive(Debug, thiserror::Error)]
pub enum WikiError {
    /// Configuration error (invalid file, missing API key, bad category).
    #[error("config error: {0}")]
    Config(String),

    /// Research could not start (invalid research configuration).
    #[error("research error: {0}")]
    Research(#[from] ResearchError),

    /// Infobox or article text generation failed.
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),

    /// I/O error while reading or writing artifacts.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Artifact or config (de)serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for WikiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, WikiError>;
