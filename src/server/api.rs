use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::info;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::cli::Args;
use crate::conversation::{assemble, ValidationError};
use crate::error::ApiError;
use crate::llm::chat::ChatClient;
use crate::models::chat::{ChatRequest, ChatResponse};
use crate::suggestions::derive_suggestions;

#[derive(Clone)]
pub struct AppState {
    client: Arc<dyn ChatClient>,
    system_prompt: Arc<str>,
    args: Args,
}

impl AppState {
    pub fn new(client: Arc<dyn ChatClient>, system_prompt: String, args: Args) -> Self {
        Self {
            client,
            system_prompt: system_prompt.into(),
            args,
        }
    }
}

/// Build the application router: liveness probes, the chat endpoint, and the
/// CORS layer for the widget frontend.
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.args.allowed_origins);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/chat", post(chat_handler))
        .layer(cors)
        .with_state(state)
}

fn cors_layer(allowed_origins: &str) -> CorsLayer {
    if allowed_origins.trim() == "*" {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn root_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "gift advisor service running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Liveness probe. Reports configuration presence only; the provider is
/// never contacted here, so the shape is constant regardless of its health.
async fn health_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    let api_key = if state.args.chat_api_key.trim().is_empty() {
        "missing"
    } else {
        "configured"
    };
    Json(json!({
        "status": "healthy",
        "api_key": api_key,
        "model": state.client.model(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) =
        payload.map_err(|rejection| ValidationError::Body(rejection.body_text()))?;

    let turns = assemble(
        &state.system_prompt,
        &request.history,
        &request.message,
        state.args.history_limit,
    )?;
    info!(
        "Chat request: {} history turns, {} sent upstream",
        request.history.len(),
        turns.len()
    );

    let reply = state.client.complete(&turns).await?;
    let suggestions = derive_suggestions(&reply, state.args.max_suggestions);

    Ok(Json(ChatResponse {
        response: reply,
        suggestions,
    }))
}
