use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, warn};
use thiserror::Error;

use crate::conversation::ValidationError;
use crate::llm::chat::ProviderError;
use crate::models::chat::ErrorBody;

/// Request-scoped failures, mapped onto the HTTP surface. Validation problems
/// are the caller's fault (400), provider problems are upstream's (502).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Upstream(#[from] ProviderError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::Validation(e) => {
                warn!("Rejected chat request: {}", e);
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            ApiError::Upstream(e) => {
                error!("Upstream provider failure: {}", e);
                (StatusCode::BAD_GATEWAY, format!("AI服务异常: {}", e))
            }
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}
