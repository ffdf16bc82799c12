//! wikigen: encyclopedia-style article generation from ranked web research.
//!
//! A run has two phases:
//!
//! - **Research** ([`wikigen_research`]): the subject fans out into
//!   category-specific queries, results are deduplicated, scored and ranked,
//!   and the top sources become the knowledge base
//! - **Generation**: an infobox (structured fact table) and an article body
//!   are generated concurrently from that knowledge base
//!
//! The exported reference list, infobox and body are then persisted as
//! three artifacts per (language, subject).

pub mod article;
pub mod config;
pub mod error;
pub mod export;
pub mod generation;
pub mod storage;

pub use article::{generate_article, generate_from_research, GeneratedArticle};
pub use config::WikiConfig;
pub use error::{Result, WikiError};
pub use export::{export_references, ExportedReference};
pub use generation::prompt::ArticleRequest;
pub use storage::ArtifactWriter;
pub use wikigen_research::{Category, Reference, ResearchConfig, ResearchOutcome};
