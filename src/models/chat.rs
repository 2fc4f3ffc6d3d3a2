use serde::{Deserialize, Serialize};

/// One prior message as submitted by the widget. Role is validated against
/// the recognized set during assembly, not during deserialization.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TurnBody {
    pub role: String,
    pub content: String,
}

/// Inbound body for POST /chat.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<TurnBody>,
}

/// Outbound body for POST /chat.
#[derive(Clone, Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub suggestions: Vec<String>,
}

/// Error payload shared by every failure response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}
