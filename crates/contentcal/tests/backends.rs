//! Backend integration tests against a mock upstream.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use contentcal::backend::completion::API_KEY_ENV;
use contentcal::{CalendarRequest, CompletionBackend, FunctionBackend, GenerationError};

/// Completion tests mutate the process-wide credential env var, so they are
/// serialized through this lock.
static ENV_LOCK: tokio::sync::Mutex<()> = tokio::sync::Mutex::const_new(());

fn request() -> CalendarRequest {
    CalendarRequest::from_args(&json!({"brand": "Acme", "audience": "CTOs"})).unwrap()
}

fn completion_body(content: &str) -> serde_json::Value {
    json!({ "choices": [ { "message": { "role": "assistant", "content": content } } ] })
}

#[tokio::test]
async fn test_function_backend_forwards_validated_args() {
    let server = MockServer::start().await;
    let payload = json!({"calendar": [], "linkedin_posts": [], "hashtags": [], "utms": []});

    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(body_json(json!({
            "brand": "Acme",
            "audience": "CTOs",
            "tone": "Confident, friendly",
            "key_dates": [],
            "urls": []
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let backend = FunctionBackend::new(format!("{}/generate", server.uri()));
    let result = backend.generate(&request()).await.unwrap();
    assert_eq!(result, payload);
}

#[tokio::test]
async fn test_function_backend_surfaces_upstream_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let backend = FunctionBackend::new(format!("{}/generate", server.uri()));
    let err = backend.generate(&request()).await.unwrap_err();
    match err {
        GenerationError::Upstream { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "overloaded");
        }
        other => panic!("expected Upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_completion_backend_sends_bearer_and_parses_prose() {
    let _guard = ENV_LOCK.lock().await;
    std::env::set_var(API_KEY_ENV, "test-key");

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(
            "Here you go:\n{\"calendar\": [], \"hashtags\": [\"#a\"]}",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let backend =
        CompletionBackend::new(format!("{}/v1/chat/completions", server.uri()), "gpt-4o-mini");
    let payload = backend.generate(&request()).await.unwrap();
    assert_eq!(payload["hashtags"], json!(["#a"]));
}

#[tokio::test]
async fn test_completion_backend_rejects_non_json_output() {
    let _guard = ENV_LOCK.lock().await;
    std::env::set_var(API_KEY_ENV, "test-key");

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("not json")))
        .mount(&server)
        .await;

    let backend = CompletionBackend::new(format!("{}/v1/chat/completions", server.uri()), "gpt-4o-mini");
    let err = backend.generate(&request()).await.unwrap_err();
    assert!(matches!(err, GenerationError::ModelOutputInvalid));
    assert_eq!(err.to_string(), "Model did not return JSON");
}

#[tokio::test]
async fn test_completion_backend_requires_credential() {
    let _guard = ENV_LOCK.lock().await;
    std::env::remove_var(API_KEY_ENV);

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("{}")))
        .expect(0)
        .mount(&server)
        .await;

    let backend = CompletionBackend::new(format!("{}/v1/chat/completions", server.uri()), "gpt-4o-mini");
    let err = backend.generate(&request()).await.unwrap_err();
    assert!(matches!(err, GenerationError::MissingCredential(_)));
}
