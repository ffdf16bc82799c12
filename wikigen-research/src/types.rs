//! Core types: raw search records, normalized references, subject categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ResearchError;
use crate::orchestrator::url_normalize::extract_domain;

/// Title used when a search record carries no usable title.
pub const UNTITLED: &str = "Untitled";

/// A single record as returned by a search backend, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResult {
    /// Page title, if the backend reported one.
    #[serde(default)]
    pub title: Option<String>,
    /// Absolute URL of the page.
    pub url: String,
    /// Extracted page text, if any.
    #[serde(default)]
    pub text: Option<String>,
    /// Publication date in whatever ISO-like form the backend uses.
    #[serde(default)]
    pub published_date: Option<String>,
}

/// One normalized piece of evidence about the subject.
///
/// References are read-only once built; `domain` is always derived from
/// `url` and never set independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    /// Display title, possibly the [`UNTITLED`] placeholder.
    pub title: String,
    /// Absolute URL; the identity key for deduplication.
    pub url: String,
    /// Extracted text snippet, possibly empty.
    pub content: String,
    /// Lowercased hostname without `www.`, or `"unknown"`.
    pub domain: String,
    /// Optional publication date string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
}

impl Reference {
    /// Build a reference, deriving `domain` from `url`.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        content: impl Into<String>,
        published_date: Option<String>,
    ) -> Self {
        let url = url.into();
        let domain = extract_domain(&url);
        let title = title.into();
        Self {
            title: if title.trim().is_empty() {
                UNTITLED.to_string()
            } else {
                title
            },
            url,
            content: content.into(),
            domain,
            published_date,
        }
    }
}

impl From<RawResult> for Reference {
    fn from(raw: RawResult) -> Self {
        let published_date = raw.published_date.filter(|d| !d.trim().is_empty());
        Self::new(
            raw.title.unwrap_or_default(),
            raw.url,
            raw.text.unwrap_or_default(),
            published_date,
        )
    }
}

/// The fixed set of subject categories the planner and schemas support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A city, region, country or other geographic place.
    Place,
    /// A company, institution or other organization.
    Organization,
    /// An individual person.
    Person,
}

impl Category {
    /// Returns the canonical lowercase name of this category.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Place => "place",
            Self::Organization => "organization",
            Self::Person => "person",
        }
    }

    /// Returns all supported categories.
    pub fn all() -> &'static [Category] {
        &[Self::Place, Self::Organization, Self::Person]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ResearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "place" | "city" | "country" | "region" => Ok(Self::Place),
            "organization" | "organisation" | "company" => Ok(Self::Organization),
            "person" | "people" => Ok(Self::Person),
            other => Err(ResearchError::Config(format!(
                "unsupported category: {other} (expected one of: place, organization, person)"
            ))),
        }
    }
}
