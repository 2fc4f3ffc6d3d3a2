pub mod chat;

use crate::cli::Args;

/// Provider settings resolved once at startup and shared by every request.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub request_timeout_secs: u64,
}

impl LlmConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            api_key: args.chat_api_key.clone(),
            base_url: args.chat_base_url.clone(),
            model: args.chat_model.clone(),
            temperature: args.temperature,
            max_tokens: args.max_tokens,
            request_timeout_secs: args.request_timeout_secs,
        }
    }
}
