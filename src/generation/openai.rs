//! OpenAI-compatible generation client.
//!
//! Uses the non-streaming Chat Completions endpoint
//! (`POST {base_url}/chat/completions`) for both free text and structured
//! records. Structured calls request `response_format: json_object` and
//! coerce the returned object into the category schema.
//!
//! # Examples
//!
//! ```rust,no_run
//! use wikigen::generation::openai::{OpenAiConfig, OpenAiGenerator};
//! use wikigen::generation::TextGenerator;
//!
//! # async fn example() -> Result<(), wikigen::generation::GenerationError> {
//! let generator = OpenAiGenerator::new(OpenAiConfig::new("sk-...", "gpt-4o-mini"))?;
//! let text = generator.generate_text(None, "Hello").await?;
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::schema::{Infobox, InfoboxSchema};
use super::{GenerationError, StructuredGenerator, TextGenerator};

/// Longest error body kept in [`GenerationError::Http`].
const MAX_ERROR_BODY_CHARS: usize = 500;

// ── Configuration ─────────────────────────────────────────────

/// Configuration for the OpenAI-compatible client.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key for bearer authentication.
    pub api_key: String,
    /// Base URL including the version prefix (defaults to `https://api.openai.com/v1`).
    pub base_url: String,
    /// The model to use.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f64,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl OpenAiConfig {
    /// Create a new config with the given API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".into(),
            model: model.into(),
            temperature: 0.3,
            timeout_seconds: 120,
        }
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }
}

// ── Wire types ────────────────────────────────────────────────

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Build the JSON request body for the Chat Completions API.
pub fn build_chat_request(
    model: &str,
    temperature: f64,
    system: Option<&str>,
    user: &str,
    json_mode: bool,
) -> serde_json::Value {
    let mut messages = Vec::with_capacity(2);
    if let Some(system) = system {
        messages.push(serde_json::json!({ "role": "system", "content": system }));
    }
    messages.push(serde_json::json!({ "role": "user", "content": user }));

    let mut body = serde_json::json!({
        "model": model,
        "messages": messages,
        "temperature": temperature,
        "stream": false,
    });
    if json_mode {
        body["response_format"] = serde_json::json!({ "type": "json_object" });
    }
    body
}

// ── Client ────────────────────────────────────────────────────

/// Generation client for OpenAI-compatible chat completion APIs.
#[derive(Debug, Clone)]
pub struct OpenAiGenerator {
    config: OpenAiConfig,
    client: reqwest::Client,
}

impl OpenAiGenerator {
    /// Create a client.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Request`] if the HTTP client cannot be built.
    pub fn new(config: OpenAiConfig) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { config, client })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    async fn complete(
        &self,
        system: Option<&str>,
        user: &str,
        json_mode: bool,
    ) -> Result<String, GenerationError> {
        let body = build_chat_request(
            &self.config.model,
            self.config.temperature,
            system,
            user,
            json_mode,
        );
        tracing::debug!(model = %self.config.model, json_mode, "sending chat completion");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(GenerationError::Http {
                status: status.as_u16(),
                body: text.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        parse_chat_content(&text)
    }
}

/// Extract the first choice's message content from a response body.
pub fn parse_chat_content(body: &str) -> Result<String, GenerationError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| GenerationError::Parse(format!("chat response: {e}")))?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|c| !c.trim().is_empty())
        .ok_or(GenerationError::EmptyResponse)
}

/// Decode a JSON object reply into an [`Infobox`] shaped by `schema`.
///
/// Markdown code fences around the object are tolerated. Non-string scalar
/// values are stringified, arrays are joined with `", "`, nulls are treated
/// as missing.
pub fn parse_infobox(content: &str, schema: &InfoboxSchema) -> Result<Infobox, GenerationError> {
    let json = strip_code_fence(content);
    let value: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| GenerationError::Parse(format!("infobox JSON: {e}")))?;
    let serde_json::Value::Object(object) = value else {
        return Err(GenerationError::Parse("infobox is not a JSON object".into()));
    };

    let pairs = object
        .into_iter()
        .filter_map(|(key, value)| value_to_string(value).map(|v| (key, v)));
    Ok(Infobox::from_pairs(pairs).conform(schema))
}

fn value_to_string(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(value_to_string)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        other => Some(other.to_string()),
    }
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate_text(
        &self,
        system: Option<&str>,
        user: &str,
    ) -> Result<String, GenerationError> {
        self.complete(system, user, false).await
    }
}

#[async_trait]
impl StructuredGenerator for OpenAiGenerator {
    async fn generate_record(
        &self,
        prompt: &str,
        schema: &InfoboxSchema,
    ) -> Result<Infobox, GenerationError> {
        let system = format!(
            "Respond with a single JSON object matching this JSON Schema:\n{}",
            schema.to_json_schema()
        );
        let content = self.complete(Some(&system), prompt, true).await?;
        parse_infobox(&content, schema)
    }
}
