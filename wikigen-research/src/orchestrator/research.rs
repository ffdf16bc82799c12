//! Research orchestrator: planned fan-out, fault isolation, dedup, rank, assemble.
//!
//! Runs every planned query concurrently against one backend, turns failed
//! queries into empty contributions, flattens the survivors in planned
//! order, then deduplicates, ranks and renders the knowledge base.

use serde::{Deserialize, Serialize};

use crate::backend::SearchBackend;
use crate::config::ResearchConfig;
use crate::fanout::{isolate, settle_all};
use crate::types::{Category, RawResult, Reference};

use super::dedup::deduplicate;
use super::knowledge_base::assemble_with_limit;
use super::planner::plan;
use super::rank::rank;

/// Everything one research run produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResearchOutcome {
    /// Deduplicated references, best first. Not truncated.
    pub references: Vec<Reference>,
    /// Knowledge base text built from the top of `references`. Empty when
    /// no evidence was found.
    pub knowledge_base: String,
    /// Number of planned queries whose execution failed.
    pub failed_queries: usize,
}

impl ResearchOutcome {
    /// Returns `true` when the run found no usable evidence.
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }
}

/// Orchestrate one research run for `subject`.
///
/// # Pipeline
///
/// 1. Plan the category-specific queries
/// 2. Fan out all queries concurrently with [`settle_all`]
/// 3. Log per-query errors at warn level and substitute an empty list
/// 4. Flatten in planned order, normalising raw records into [`Reference`]s
/// 5. Deduplicate by URL key (first occurrence wins)
/// 6. Rank by score (stable)
/// 7. Render the top `config.knowledge_base_limit` (at most 15) into the knowledge base
///
/// Never fails: when every query fails or returns nothing, the outcome is
/// empty and generation runs without evidence.
pub async fn orchestrate_research<B: SearchBackend>(
    backend: &B,
    subject: &str,
    category: Category,
    config: &ResearchConfig,
) -> ResearchOutcome {
    let queries = plan(subject, category);
    tracing::debug!(%category, queries = queries.len(), backend = backend.name(), "planned research queries");

    // 1. Fan out to the backend concurrently.
    let outcomes = settle_all(queries.iter().map(|q| backend.search(q))).await;

    // 2. Isolate failures; a failed query contributes nothing.
    let mut failed_queries = 0;
    let per_query: Vec<Vec<RawResult>> = isolate(outcomes, |index, err| {
        failed_queries += 1;
        tracing::warn!(query = %queries[index], error = %err, "research query failed");
        Vec::new()
    });

    for (query, results) in queries.iter().zip(&per_query) {
        tracing::debug!(query = %query, count = results.len(), "query returned results");
    }

    // 3. Flatten in planned order.
    let flattened: Vec<Reference> = per_query
        .into_iter()
        .flatten()
        .map(Reference::from)
        .collect();
    let found = flattened.len();

    // 4. Deduplicate, then rank.
    let references = rank(deduplicate(flattened));

    // 5. Assemble the bounded corpus.
    let knowledge_base = assemble_with_limit(&references, config.knowledge_base_limit);

    tracing::info!(
        found,
        unique = references.len(),
        failed_queries,
        knowledge_base_chars = knowledge_base.len(),
        "research complete"
    );

    ResearchOutcome {
        references,
        knowledge_base,
        failed_queries,
    }
}
