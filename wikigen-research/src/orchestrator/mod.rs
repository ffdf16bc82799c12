//! Research orchestrator: query planning, concurrent search, dedup, scoring,
//! ranking and knowledge base assembly.
//!
//! This module fans a subject out into category-specific queries, runs them
//! concurrently with per-query fault isolation, deduplicates references by
//! URL key, ranks them by a per-reference score and renders the bounded
//! knowledge base that generation consumes.

pub mod dedup;
pub mod knowledge_base;
pub mod planner;
pub mod rank;
pub mod research;
pub mod scoring;
pub mod url_normalize;
