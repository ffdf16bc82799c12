//! Stable ranking of references by score.

use chrono::{DateTime, Utc};

use crate::types::Reference;

use super::scoring::score_at;

/// Rank references by score, highest first, scoring against the current time.
pub fn rank(references: Vec<Reference>) -> Vec<Reference> {
    rank_at(references, Utc::now())
}

/// Rank references by score with recency measured from `now`.
///
/// Each reference is scored exactly once. The sort is stable, so references
/// with equal scores keep their incoming relative order. The full list is
/// returned; truncation is left to the knowledge base assembler.
pub fn rank_at(references: Vec<Reference>, now: DateTime<Utc>) -> Vec<Reference> {
    let mut scored: Vec<(f64, Reference)> = references
        .into_iter()
        .map(|r| (score_at(&r, now), r))
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    scored.into_iter().map(|(_, r)| r).collect()
}
