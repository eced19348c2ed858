use super::MockInferenceClient;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use code_review_api::{
    config::{OllamaConfig, ReviewConfig},
    llm::{InferenceClient, OllamaClient},
    review::{ReviewResponse, ReviewService},
    server::{self, AppState},
};
use serde_json::Value;
use std::{sync::Arc, time::Duration};

pub const TEST_MODEL: &str = "deepseek-coder:1.3b";

/// Review service backed by the given mock
pub fn create_test_service(mock: &MockInferenceClient) -> ReviewService {
    let client: Arc<dyn InferenceClient> = Arc::new(mock.clone());
    ReviewService::new(client, TEST_MODEL, ReviewConfig::default())
}

/// Router wired to the given mock
pub fn create_test_app(mock: &MockInferenceClient) -> Router {
    server::router(AppState {
        reviewer: Arc::new(create_test_service(mock)),
    })
}

/// Ollama client pointed at a mock server
pub fn create_ollama_client(base_url: &str, timeout: Duration) -> OllamaClient {
    let config = OllamaConfig {
        base_url: base_url.to_string(),
        ..OllamaConfig::default()
    };
    OllamaClient::new(&config).with_timeout(timeout)
}

/// Router wired to a real Ollama client pointed at `base_url`
pub fn create_ollama_app(base_url: &str) -> Router {
    create_ollama_app_with_timeout(base_url, Duration::from_secs(5))
}

/// Router wired to a real Ollama client with a custom deadline
pub fn create_ollama_app_with_timeout(base_url: &str, timeout: Duration) -> Router {
    let client = create_ollama_client(base_url, timeout);
    let reviewer = ReviewService::new(Arc::new(client), TEST_MODEL, ReviewConfig::default());
    server::router(AppState {
        reviewer: Arc::new(reviewer),
    })
}

pub fn review_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/review")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn review_body(response: Response<Body>) -> ReviewResponse {
    serde_json::from_str(&body_string(response).await).unwrap()
}

/// Ollama chat response carrying the given content
pub fn ollama_reply(content: &str) -> Value {
    serde_json::json!({
        "model": TEST_MODEL,
        "created_at": "2024-01-01T00:00:00Z",
        "message": {"role": "assistant", "content": content},
        "done": true
    })
}
