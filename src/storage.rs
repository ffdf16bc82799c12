//! Filesystem persistence of generated articles.
//!
//! Each (language, subject) pair gets its own directory:
//!
//! ```text
//! {root}/{language}/{slug}/infobox.json
//! {root}/{language}/{slug}/references.json
//! {root}/{language}/{slug}/article.txt
//! ```

use std::path::{Path, PathBuf};

use crate::article::GeneratedArticle;
use crate::error::{Result, WikiError};
use crate::export::ExportedReference;

/// File name of the infobox artifact.
pub const INFOBOX_FILE: &str = "infobox.json";
/// File name of the reference list artifact.
pub const REFERENCES_FILE: &str = "references.json";
/// File name of the article body artifact.
pub const ARTICLE_FILE: &str = "article.txt";

/// Convert a subject into a filesystem-safe directory name.
///
/// Lowercases, collapses every run of non-alphanumeric characters into a
/// single `-`, and trims leading/trailing dashes.
pub fn slugify(subject: &str) -> String {
    let mut slug = String::with_capacity(subject.len());
    let mut pending_dash = false;
    for c in subject.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Paths written for one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Directory holding the three files.
    pub dir: PathBuf,
    /// Infobox JSON object.
    pub infobox: PathBuf,
    /// Reference list JSON array.
    pub references: PathBuf,
    /// Raw article text.
    pub article: PathBuf,
}

/// Writes article artifacts under a root directory.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    root: PathBuf,
}

impl ArtifactWriter {
    /// Create a writer rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root output directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Paths for a given language and subject.
    ///
    /// # Errors
    ///
    /// Returns [`WikiError::Config`] if the subject or language slug is empty.
    pub fn paths_for(&self, language: &str, subject: &str) -> Result<ArtifactPaths> {
        let language = slugify(language);
        let slug = slugify(subject);
        if language.is_empty() || slug.is_empty() {
            return Err(WikiError::Config(format!(
                "cannot derive an output directory from language {language:?} and subject {subject:?}"
            )));
        }
        let dir = self.root.join(language).join(slug);
        Ok(ArtifactPaths {
            infobox: dir.join(INFOBOX_FILE),
            references: dir.join(REFERENCES_FILE),
            article: dir.join(ARTICLE_FILE),
            dir,
        })
    }

    /// Write all three artifacts, creating directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or file cannot be written.
    pub fn write(&self, article: &GeneratedArticle) -> Result<ArtifactPaths> {
        let paths = self.paths_for(&article.language, &article.subject)?;
        std::fs::create_dir_all(&paths.dir)?;

        std::fs::write(&paths.infobox, serde_json::to_string_pretty(&article.infobox)?)?;
        std::fs::write(
            &paths.references,
            serde_json::to_string_pretty(&article.references)?,
        )?;
        std::fs::write(&paths.article, &article.body)?;

        tracing::info!(dir = %paths.dir.display(), "artifacts written");
        Ok(paths)
    }

    /// Read back a previously written reference list.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or is not a valid list.
    pub fn read_references(&self, language: &str, subject: &str) -> Result<Vec<ExportedReference>> {
        let paths = self.paths_for(language, subject)?;
        let content = std::fs::read_to_string(&paths.references)?;
        Ok(serde_json::from_str(&content)?)
    }
}
