//! # wikigen-research
//!
//! Research aggregation and source ranking for wikigen.
//!
//! Given a subject and its category, this crate plans a handful of
//! topic-specific search queries, runs them concurrently against a search
//! backend, and turns the heterogeneous results into a ranked, bounded
//! evidence corpus (the *knowledge base*) for article generation.
//!
//! ## Design
//!
//! - Queries fan out together and are joined positionally, so response
//!   arrival order never changes the result
//! - A failed query contributes nothing; the run itself never fails
//! - References are deduplicated by lowercased URL (first occurrence wins)
//! - Each reference is scored on its own: authority, substance, recency,
//!   brevity penalty. The sort is stable
//! - The knowledge base holds at most 15 sources; the full ranked list is
//!   still returned for export
//!
//! ## Security
//!
//! - Search queries are logged only at debug/trace level
//! - API keys are never included in errors or logs

pub mod backend;
pub mod backends;
pub mod cache;
pub mod config;
pub mod error;
pub mod fanout;
pub mod http;
pub mod orchestrator;
pub mod types;

pub use backend::SearchBackend;
pub use backends::ExaBackend;
pub use cache::CachedBackend;
pub use config::ResearchConfig;
pub use error::{ResearchError, Result};
pub use orchestrator::research::ResearchOutcome;
pub use types::{Category, RawResult, Reference};

/// Research a subject using `backend`.
///
/// Validates `config`, then plans, executes, deduplicates, ranks and
/// assembles. Per-query failures are logged and skipped.
///
/// # Errors
///
/// Returns [`ResearchError::Config`] only if `config` is invalid. A run in
/// which every query fails is an empty [`ResearchOutcome`], not an error.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> wikigen_research::Result<()> {
/// use wikigen_research::{Category, ExaBackend, ResearchConfig};
///
/// let config = ResearchConfig::default();
/// let backend = ExaBackend::new("api-key", &config)?;
/// let outcome = wikigen_research::research(&backend, "Lisbon", Category::Place, &config).await?;
/// for reference in &outcome.references {
///     println!("{}: {}", reference.title, reference.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn research<B: SearchBackend>(
    backend: &B,
    subject: &str,
    category: Category,
    config: &ResearchConfig,
) -> Result<ResearchOutcome> {
    config.validate()?;
    Ok(orchestrator::research::orchestrate_research(backend, subject, category, config).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NeverCalled;

    impl SearchBackend for NeverCalled {
        async fn search(&self, _query: &str) -> Result<Vec<RawResult>> {
            Err(ResearchError::Http("should not be called".into()))
        }

        fn name(&self) -> &str {
            "never"
        }
    }

    #[tokio::test]
    async fn research_validates_config_zero_results_per_query() {
        let config = ResearchConfig {
            results_per_query: 0,
            ..Default::default()
        };
        let result = research(&NeverCalled, "x", Category::Place, &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("results_per_query"));
    }

    #[tokio::test]
    async fn all_failing_queries_yield_empty_outcome() {
        let outcome = research(&NeverCalled, "x", Category::Person, &ResearchConfig::default())
            .await
            .expect("failures are isolated");
        assert!(outcome.is_empty());
        assert_eq!(outcome.knowledge_base, "");
        assert_eq!(outcome.failed_queries, 3);
    }
}
