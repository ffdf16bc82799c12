//! Generation contracts: free text and schema-shaped records.
//!
//! The article pipeline only depends on the two traits here. Concrete
//! clients (see [`openai`]) and test doubles implement them.

pub mod openai;
pub mod prompt;
pub mod schema;

use async_trait::async_trait;

pub use schema::{Infobox, InfoboxSchema, UNKNOWN_VALUE};

/// Errors produced by generation clients.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The provider answered with a non-success status.
    #[error("provider returned status {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated.
        body: String,
    },

    /// The response could not be decoded into the expected shape.
    #[error("invalid response: {0}")]
    Parse(String),

    /// The provider returned no content.
    #[error("empty response from provider")]
    EmptyResponse,
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err.to_string())
    }
}

/// Produces free text from an optional system prompt and a user prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text.
    async fn generate_text(
        &self,
        system: Option<&str>,
        user: &str,
    ) -> Result<String, GenerationError>;
}

/// Produces a record conforming to an [`InfoboxSchema`].
#[async_trait]
pub trait StructuredGenerator: Send + Sync {
    /// Generate a record for `schema` from `prompt`.
    ///
    /// Implementations return the record already passed through
    /// [`Infobox::conform`].
    async fn generate_record(
        &self,
        prompt: &str,
        schema: &InfoboxSchema,
    ) -> Result<Infobox, GenerationError>;
}
