//! Prompt construction for infobox extraction and article writing.
//!
//! Every prompt carries the knowledge base verbatim. When research found
//! nothing, the prompts say so explicitly and ask for best-effort output
//! with `unknown` placeholders rather than invented facts.

use wikigen_research::Category;

use super::schema::{InfoboxSchema, UNKNOWN_VALUE};

/// Subject, category and output language of one article run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRequest {
    /// The subject to write about.
    pub subject: String,
    /// Subject category; selects queries and infobox schema.
    pub category: Category,
    /// Output language code, e.g. `"en"`.
    pub language: String,
}

impl ArticleRequest {
    /// Create a request with the default language (`"en"`).
    pub fn new(subject: impl Into<String>, category: Category) -> Self {
        Self {
            subject: subject.into(),
            category,
            language: "en".to_string(),
        }
    }

    /// Set the output language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

const NO_EVIDENCE: &str = "No sources were found for this subject.";

fn evidence_section(knowledge_base: &str) -> String {
    if knowledge_base.is_empty() {
        format!("## Sources\n\n{NO_EVIDENCE}")
    } else {
        format!("## Sources\n\n{knowledge_base}")
    }
}

/// Prompt for structured infobox extraction.
pub fn infobox_prompt(
    request: &ArticleRequest,
    schema: &InfoboxSchema,
    knowledge_base: &str,
) -> String {
    let fields = schema.fields().join(", ");
    format!(
        "Extract an infobox for the {category} \"{subject}\".\n\
         Return a JSON object with exactly these string fields: {fields}.\n\
         Use only facts supported by the sources below. Write values in language \"{language}\".\n\
         If a fact is not in the sources, use \"{UNKNOWN_VALUE}\".\n\n\
         {evidence}",
        category = request.category,
        subject = request.subject,
        language = request.language,
        evidence = evidence_section(knowledge_base),
    )
}

/// System prompt for article body generation.
pub fn article_system_prompt(language: &str) -> String {
    format!(
        "You are an encyclopedia writer. Write neutral, factual, well-structured prose \
         in language \"{language}\". Cite sources inline as [n] using the source numbers \
         provided. Do not invent facts that the sources do not support."
    )
}

/// User prompt for article body generation.
pub fn article_user_prompt(request: &ArticleRequest, knowledge_base: &str) -> String {
    let guidance = if knowledge_base.is_empty() {
        "Sources are unavailable; write a short best-effort stub and state that \
         little verified information is available."
    } else {
        "Write a comprehensive article with an introduction and thematic sections."
    };
    format!(
        "Write an encyclopedia article about the {category} \"{subject}\".\n{guidance}\n\n{evidence}",
        category = request.category,
        subject = request.subject,
        evidence = evidence_section(knowledge_base),
    )
}
