//! Reference deduplication by URL key.
//!
//! References that share a [`dedup_key`] refer to the same page. The first
//! one seen wins, and the output keeps first-seen order, so the result is
//! deterministic for a given flattened input.

use std::collections::HashSet;

use crate::types::Reference;

use super::url_normalize::dedup_key;

/// Drop every reference whose URL key was already seen.
///
/// Later duplicates are discarded even when their `title` or `content`
/// differ from the kept entry.
pub fn deduplicate(references: Vec<Reference>) -> Vec<Reference> {
    let mut seen: HashSet<String> = HashSet::with_capacity(references.len());
    references
        .into_iter()
        .filter(|r| seen.insert(dedup_key(&r.url)))
        .collect()
}
