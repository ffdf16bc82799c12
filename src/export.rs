//! Export of the ranked reference list.
//!
//! Ids are assigned after ranking, starting at 1, so id order is rank
//! order. The export covers the whole ranked list, not just the sources
//! that made it into the knowledge base.

use serde::{Deserialize, Serialize};
use wikigen_research::Reference;

/// One persisted reference entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedReference {
    /// 1-based rank position.
    pub id: usize,
    /// Display title.
    pub title: String,
    /// Source URL.
    pub url: String,
    /// Normalised domain.
    pub domain: String,
    /// Publication date, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
}

/// Number the ranked references `1..=N`.
pub fn export_references(ranked: &[Reference]) -> Vec<ExportedReference> {
    ranked
        .iter()
        .enumerate()
        .map(|(i, r)| ExportedReference {
            id: i + 1,
            title: r.title.clone(),
            url: r.url.clone(),
            domain: r.domain.clone(),
            published_date: r.published_date.clone(),
        })
        .collect()
}
