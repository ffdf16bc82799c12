//! OpenAI-compatible generation client contract tests.
//!
//! These tests verify request format, auth, response parsing and error
//! mapping against a wiremock server.

use serde_json::json;
use wikigen::generation::openai::{OpenAiConfig, OpenAiGenerator};
use wikigen::generation::{GenerationError, InfoboxSchema, StructuredGenerator, TextGenerator};
use wikigen::Category;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn generator(server: &MockServer) -> OpenAiGenerator {
    let config = OpenAiConfig::new("test-key", "test-model").with_base_url(format!("{}/v1", server.uri()));
    match OpenAiGenerator::new(config) {
        Ok(g) => g,
        Err(e) => unreachable!("client should build: {e}"),
    }
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

#[tokio::test]
async fn text_request_has_model_messages_and_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "test-model",
            "messages": [
                {"role": "system", "content": "be brief"},
                {"role": "user", "content": "Write about Lisbon"}
            ],
            "stream": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("Lisbon is a city.")))
        .expect(1)
        .mount(&server)
        .await;

    let text = generator(&server)
        .generate_text(Some("be brief"), "Write about Lisbon")
        .await
        .expect("text");
    assert_eq!(text, "Lisbon is a city.");
}

#[tokio::test]
async fn structured_request_uses_json_mode_and_conforms() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({"response_format": {"type": "json_object"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(
            r#"{"full_name":"Ada King","born":"1815-12-10","extra":"dropped"}"#,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let schema = InfoboxSchema::for_category(Category::Person);
    let infobox = generator(&server)
        .generate_record("Extract", &schema)
        .await
        .expect("record");
    assert_eq!(infobox.get("full_name"), Some("Ada King"));
    assert_eq!(infobox.get("born"), Some("1815-12-10"));
    assert_eq!(infobox.get("awards"), Some("unknown"));
    assert_eq!(infobox.get("extra"), None);
}

#[tokio::test]
async fn non_success_status_maps_to_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let err = generator(&server).generate_text(None, "hi").await.unwrap_err();
    match err {
        GenerationError::Http { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid api key"));
        }
        other => unreachable!("expected HTTP error, got {other}"),
    }
}

#[tokio::test]
async fn empty_choices_is_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let err = generator(&server).generate_text(None, "hi").await.unwrap_err();
    assert!(matches!(err, GenerationError::EmptyResponse));
}

#[tokio::test]
async fn malformed_infobox_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("not json at all")))
        .mount(&server)
        .await;

    let schema = InfoboxSchema::for_category(Category::Place);
    let err = generator(&server)
        .generate_record("Extract", &schema)
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::Parse(_)));
}
