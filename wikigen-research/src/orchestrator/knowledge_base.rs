//! Knowledge base assembly: the bounded text corpus handed to generation.
//!
//! Each included reference becomes one block:
//!
//! ```text
//! [Source 1]
//! Title: …
//! URL: …
//! Domain: …
//! Content: …
//! ```
//!
//! Blocks are separated by a blank line. The source number is the position
//! inside the knowledge base and is unrelated to exported reference ids.

use crate::config::{DEFAULT_KNOWLEDGE_BASE_LIMIT, MAX_KNOWLEDGE_BASE_ENTRIES};
use crate::types::Reference;

/// Render the top [`DEFAULT_KNOWLEDGE_BASE_LIMIT`] references.
pub fn assemble(ranked: &[Reference]) -> String {
    assemble_with_limit(ranked, DEFAULT_KNOWLEDGE_BASE_LIMIT)
}

/// Render at most `limit` references from the front of `ranked`.
///
/// `limit` is clamped to [`MAX_KNOWLEDGE_BASE_ENTRIES`].
///
/// Returns an empty string when there is nothing to render; generation
/// treats that as "no evidence".
pub fn assemble_with_limit(ranked: &[Reference], limit: usize) -> String {
    ranked
        .iter()
        .take(limit.min(MAX_KNOWLEDGE_BASE_ENTRIES))
        .enumerate()
        .map(|(i, r)| source_block(i + 1, r))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn source_block(index: usize, r: &Reference) -> String {
    format!(
        "[Source {index}]\nTitle: {}\nURL: {}\nDomain: {}\nContent: {}",
        r.title, r.url, r.domain, r.content
    )
}
