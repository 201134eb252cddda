use bantuan_backend::config::Config;
use bantuan_backend::message::{ChatResponse, HealthResponse};
use bantuan_backend::routes::create_router;
use bantuan_backend::services::catalog::{self, MessageKind};
use bantuan_backend::services::completion::{CompletionBackend, CompletionError};
use bantuan_backend::state::AppState;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::util::ServiceExt;

/// Backend double that counts calls and either replies or fails.
struct MockBackend {
    calls: AtomicUsize,
    reply: Option<&'static str>,
}

impl MockBackend {
    fn replying(reply: &'static str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            reply: Some(reply),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            reply: None,
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionBackend for MockBackend {
    async fn complete(
        &self,
        _message: &str,
        _language: &str,
        _category: &str,
    ) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.reply {
            Some(text) => Ok(text.to_string()),
            None => Err(CompletionError::Remote("connection refused".to_string())),
        }
    }
}

fn app_with(backend: Arc<dyn CompletionBackend>) -> Router {
    let state = Arc::new(AppState::with_backend(Config::default(), backend));
    create_router().with_state(state)
}

fn chat_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = app_with(MockBackend::replying("hi"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let health: HealthResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.service, "Bantuan Backend");
    chrono::DateTime::parse_from_rfc3339(&health.timestamp)
        .expect("timestamp should be ISO-8601");
}

#[tokio::test]
async fn test_chat_happy_path_with_defaults() {
    let backend = MockBackend::replying("Hello from the model");
    let app = app_with(backend.clone());

    let response = app
        .oneshot(chat_request(r#"{"message": "Hello"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let chat: ChatResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(chat.status, "success");
    assert_eq!(chat.message, "Hello");
    assert_eq!(chat.response, "Hello from the model");
    // Defaults when language/category are absent.
    assert_eq!(chat.language, "en");
    assert_eq!(chat.category, "general");
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn test_whitespace_message_is_rejected_without_remote_call() {
    let backend = MockBackend::replying("unused");
    let app = app_with(backend.clone());

    let response = app
        .oneshot(chat_request(r#"{"message": "  "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Message cannot be empty");
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_missing_message_field_is_rejected() {
    let backend = MockBackend::replying("unused");
    let app = app_with(backend.clone());

    let response = app
        .oneshot(chat_request(r#"{"language": "en"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_remote_failure_degrades_to_fallback_text() {
    let app = app_with(MockBackend::failing());

    let response = app
        .oneshot(chat_request(
            r#"{"message": "Hello", "language": "th", "category": "general"}"#,
        ))
        .await
        .unwrap();

    // Availability contract: remote failure is never a 5xx.
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let chat: ChatResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(chat.status, "success");
    assert_eq!(chat.language, "th");
    assert_eq!(chat.response, catalog::canned(MessageKind::Fallback, "th"));
}

#[tokio::test]
async fn test_unconfigured_foundry_client_serves_fallback_for_every_language() {
    // Real client with no endpoint/key: NotConfigured on each call.
    let state = Arc::new(AppState::new(Config::default()));
    let app = create_router().with_state(state);

    for (lang, _) in catalog::SUPPORTED_LANGUAGES {
        let body = format!(r#"{{"message": "Hello", "language": "{lang}"}}"#);
        let response = app.clone().oneshot(chat_request(&body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let chat = body_json(response).await;
        assert_eq!(chat["status"], "success");
        assert_eq!(
            chat["response"],
            catalog::canned(MessageKind::Fallback, lang)
        );
    }
}

#[tokio::test]
async fn test_languages_endpoint_is_idempotent() {
    let app = app_with(MockBackend::replying("hi"));

    let mut bodies = Vec::new();
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/languages")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        bodies.push(bytes);
    }
    assert_eq!(bodies[0], bodies[1]);

    let body: serde_json::Value = serde_json::from_slice(&bodies[0]).unwrap();
    assert_eq!(body["status"], "success");
    assert_eq!(body["languages"]["en"], "English");
    assert_eq!(body["languages"].as_object().unwrap().len(), 10);
}

#[tokio::test]
async fn test_models_endpoint() {
    let app = app_with(MockBackend::replying("hi"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/models")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["models"][0]["id"], "default");
    assert_eq!(body["models"][0]["languages"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let app = app_with(MockBackend::replying("hi"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/sessions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Endpoint not found");
}

#[tokio::test]
async fn test_unknown_language_echoed_but_resolved_to_english() {
    let app = app_with(MockBackend::failing());

    let response = app
        .oneshot(chat_request(r#"{"message": "Hola", "language": "xx"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let chat = body_json(response).await;
    assert_eq!(chat["language"], "xx");
    assert_eq!(
        chat["response"],
        catalog::canned(MessageKind::Fallback, "en")
    );
}
