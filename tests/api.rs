use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use clap::Parser;
use serde_json::Value;
use tower::util::ServiceExt;

use gift_advisor::cli::Args;
use gift_advisor::conversation::Turn;
use gift_advisor::llm::chat::openai::OpenAiChatClient;
use gift_advisor::llm::chat::{ChatClient, ProviderError};
use gift_advisor::llm::LlmConfig;
use gift_advisor::server::api::{router, AppState};

/// Stub provider that replays a fixed reply.
struct CannedClient {
    reply: String,
}

#[async_trait]
impl ChatClient for CannedClient {
    async fn complete(&self, _turns: &[Turn]) -> Result<String, ProviderError> {
        Ok(self.reply.clone())
    }

    fn model(&self) -> &str {
        "canned-model"
    }
}

fn test_args() -> Args {
    Args::parse_from(["gift-advisor", "--chat-api-key", "sk-test"])
}

fn app_with_client(client: Arc<dyn ChatClient>) -> Router {
    let state = AppState::new(client, "你是礼物推荐顾问".to_string(), test_args());
    router(state)
}

fn canned_app(reply: &str) -> Router {
    app_with_client(Arc::new(CannedClient {
        reply: reply.to_string(),
    }))
}

/// App whose provider client points at a closed local port.
fn unreachable_provider_app() -> Router {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe port");
        listener.local_addr().expect("probe addr").port()
        // listener dropped here, connections to the port are refused
    };
    let config = LlmConfig {
        api_key: "sk-test".into(),
        base_url: format!("http://127.0.0.1:{port}/v1"),
        model: "qwen-max".into(),
        temperature: 0.8,
        max_tokens: 500,
        request_timeout_secs: 2,
    };
    let client = OpenAiChatClient::new(&config).expect("build provider client");
    app_with_client(Arc::new(client))
}

async fn get(app: Router, path: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("send request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

async fn post_chat(app: Router, payload: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/chat")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .expect("build request"),
        )
        .await
        .expect("send request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

#[tokio::test]
async fn health_returns_constant_shape() {
    let (status, body) = get(canned_app("ok"), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["api_key"], "configured");
    assert_eq!(body["model"], "canned-model");
}

#[tokio::test]
async fn root_returns_ok_payload() {
    let (status, body) = get(canned_app("ok"), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn chat_returns_reply_and_suggestions() {
    let app = canned_app("好的！请问你的预算大概是多少呢？");
    let (status, body) = post_chat(
        app,
        serde_json::json!({"message": "我想给女朋友买生日礼物", "history": []}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let reply = body["response"].as_str().expect("response string");
    assert!(!reply.is_empty());
    let suggestions = body["suggestions"].as_array().expect("suggestions array");
    assert!(suggestions.len() <= 4);
}

#[tokio::test]
async fn chat_forwards_history_unchanged() {
    let app = canned_app("明白了");
    let (status, _body) = post_chat(
        app,
        serde_json::json!({
            "message": "预算500左右",
            "history": [
                {"role": "user", "content": "我想买礼物"},
                {"role": "assistant", "content": "请问预算是多少？"}
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn empty_message_is_rejected_with_detail() {
    let (status, body) = post_chat(
        canned_app("unused"),
        serde_json::json!({"message": "", "history": []}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().expect("detail string").contains("empty"));
}

#[tokio::test]
async fn malformed_history_entry_rejects_whole_request() {
    let (status, body) = post_chat(
        canned_app("unused"),
        serde_json::json!({
            "message": "hi",
            "history": [{"role": "robot", "content": "hello"}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().expect("detail string").contains("robot"));
}

#[tokio::test]
async fn unknown_body_field_is_rejected() {
    let (status, body) = post_chat(
        canned_app("unused"),
        serde_json::json!({"message": "hi", "history": [], "stream": true}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn unreachable_provider_surfaces_502_without_partial_response() {
    let (status, body) = post_chat(
        unreachable_provider_app(),
        serde_json::json!({"message": "我想买礼物", "history": []}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["detail"].is_string());
    assert!(body.get("response").is_none());
}
