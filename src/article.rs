//! Article generation run: research, then infobox and body in parallel.
//!
//! Evidence gathering tolerates failure (a query that fails simply
//! contributes nothing), but generation does not: if either the infobox
//! call or the body call fails, the whole run fails with that error.

use serde::Serialize;
use wikigen_research::fanout::settle_pair;
use wikigen_research::{Category, ResearchConfig, ResearchOutcome, SearchBackend};

use crate::error::Result;
use crate::export::{export_references, ExportedReference};
use crate::generation::prompt::{
    article_system_prompt, article_user_prompt, infobox_prompt, ArticleRequest,
};
use crate::generation::{Infobox, InfoboxSchema, StructuredGenerator, TextGenerator};

/// The three artifacts of one run, plus the request that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedArticle {
    /// Subject written about.
    pub subject: String,
    /// Output language code.
    pub language: String,
    /// Subject category.
    pub category: Category,
    /// Structured fact table, conforming to the category schema.
    pub infobox: Infobox,
    /// Full ranked reference list with ids `1..=N`.
    pub references: Vec<ExportedReference>,
    /// Article body text.
    pub body: String,
}

/// Research `request.subject` and generate the article from the evidence.
///
/// # Errors
///
/// Returns [`crate::WikiError::Research`] if `research_config` is invalid and
/// [`crate::WikiError::Generation`] if either generation call fails. Failed
/// search queries are not errors.
pub async fn generate_article<B, S, T>(
    request: &ArticleRequest,
    backend: &B,
    structured: &S,
    text: &T,
    research_config: &ResearchConfig,
) -> Result<GeneratedArticle>
where
    B: SearchBackend,
    S: StructuredGenerator + ?Sized,
    T: TextGenerator + ?Sized,
{
    tracing::info!(subject = %request.subject, category = %request.category, language = %request.language, "starting article run");

    let outcome =
        wikigen_research::research(backend, &request.subject, request.category, research_config)
            .await?;

    if outcome.is_empty() {
        tracing::warn!(subject = %request.subject, "no evidence found; generating without sources");
    }

    generate_from_research(request, outcome, structured, text).await
}

/// Generate the article from an already completed research outcome.
///
/// The infobox and body calls start together and are both awaited.
///
/// # Errors
///
/// Returns [`crate::WikiError::Generation`] if either call fails.
pub async fn generate_from_research<S, T>(
    request: &ArticleRequest,
    outcome: ResearchOutcome,
    structured: &S,
    text: &T,
) -> Result<GeneratedArticle>
where
    S: StructuredGenerator + ?Sized,
    T: TextGenerator + ?Sized,
{
    let schema = InfoboxSchema::for_category(request.category);
    let infobox_request = infobox_prompt(request, &schema, &outcome.knowledge_base);
    let system = article_system_prompt(&request.language);
    let user = article_user_prompt(request, &outcome.knowledge_base);

    let (infobox, body) = settle_pair(
        structured.generate_record(&infobox_request, &schema),
        text.generate_text(Some(&system), &user),
    )
    .await;

    let infobox = infobox?;
    let body = body?;

    let references = export_references(&outcome.references);
    tracing::info!(
        references = references.len(),
        infobox_fields = infobox.len(),
        body_chars = body.len(),
        "article generated"
    );

    Ok(GeneratedArticle {
        subject: request.subject.clone(),
        language: request.language.clone(),
        category: request.category,
        infobox,
        references,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::GenerationError;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use wikigen_research::Reference;

    struct EchoText;

    #[async_trait]
    impl TextGenerator for EchoText {
        async fn generate_text(
            &self,
            _system: Option<&str>,
            user: &str,
        ) -> std::result::Result<String, GenerationError> {
            Ok(format!("BODY:{}", user.len()))
        }
    }

    #[derive(Default)]
    struct RecordingStructured {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl StructuredGenerator for RecordingStructured {
        async fn generate_record(
            &self,
            prompt: &str,
            schema: &InfoboxSchema,
        ) -> std::result::Result<Infobox, GenerationError> {
            if let Ok(mut prompts) = self.prompts.lock() {
                prompts.push(prompt.to_string());
            }
            Ok(Infobox::placeholder(schema))
        }
    }

    struct FailingText;

    #[async_trait]
    impl TextGenerator for FailingText {
        async fn generate_text(
            &self,
            _system: Option<&str>,
            _user: &str,
        ) -> std::result::Result<String, GenerationError> {
            Err(GenerationError::Http {
                status: 500,
                body: "down".into(),
            })
        }
    }

    fn outcome() -> ResearchOutcome {
        let references = vec![
            Reference::new("A", "https://a.gov", "a".repeat(300), None),
            Reference::new("B", "https://b.com", "b".repeat(300), None),
        ];
        let knowledge_base =
            wikigen_research::orchestrator::knowledge_base::assemble(&references);
        ResearchOutcome {
            references,
            knowledge_base,
            failed_queries: 0,
        }
    }

    #[tokio::test]
    async fn builds_article_from_outcome() {
        let request = ArticleRequest::new("Lisbon", Category::Place);
        let structured = RecordingStructured::default();
        let article = generate_from_research(&request, outcome(), &structured, &EchoText)
            .await
            .expect("generation");

        assert_eq!(article.subject, "Lisbon");
        assert_eq!(article.references.len(), 2);
        assert_eq!(article.references[0].id, 1);
        assert!(article.body.starts_with("BODY:"));
        assert_eq!(
            article.infobox.len(),
            InfoboxSchema::for_category(Category::Place).fields().len()
        );
        let prompts = structured.prompts.lock().expect("lock");
        assert!(prompts[0].contains("[Source 2]"));
    }

    #[tokio::test]
    async fn empty_outcome_still_generates() {
        let request = ArticleRequest::new("Nowhere", Category::Place);
        let article = generate_from_research(
            &request,
            ResearchOutcome::default(),
            &RecordingStructured::default(),
            &EchoText,
        )
        .await
        .expect("empty evidence is not fatal");
        assert!(article.references.is_empty());
        assert!(!article.body.is_empty());
    }

    #[tokio::test]
    async fn body_failure_is_fatal() {
        let request = ArticleRequest::new("Lisbon", Category::Place);
        let err = generate_from_research(
            &request,
            outcome(),
            &RecordingStructured::default(),
            &FailingText,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, crate::WikiError::Generation(_)));
        assert!(err.to_string().contains("500"));
    }
}
