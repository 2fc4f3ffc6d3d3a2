use clap::Parser;

use crate::config::ConfigError;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Host address and port for the server to listen on.
    #[arg(long, env = "SERVER_ADDR", default_value = "0.0.0.0:8000")]
    pub server_addr: String,

    /// API key for the chat model provider (DashScope compatible-mode).
    #[arg(long, env = "DASHSCOPE_API_KEY", default_value = "")]
    pub chat_api_key: String,

    /// Base URL for the OpenAI-compatible chat completions API.
    #[arg(
        long,
        env = "CHAT_BASE_URL",
        default_value = "https://dashscope.aliyuncs.com/compatible-mode/v1"
    )]
    pub chat_base_url: String,

    /// Model name for chat completion (e.g., qwen-max, qwen-plus)
    #[arg(long, env = "CHAT_MODEL", default_value = "qwen-max")]
    pub chat_model: String,

    /// Sampling temperature passed to the provider (0.0 to 2.0).
    #[arg(long, env = "TEMPERATURE", default_value = "0.8")]
    pub temperature: f32,

    /// Maximum completion tokens requested from the provider.
    #[arg(long, env = "MAX_TOKENS", default_value = "500")]
    pub max_tokens: u32,

    /// Timeout in seconds for a single provider call.
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "30")]
    pub request_timeout_secs: u64,

    /// Maximum number of history messages forwarded upstream (most recent kept).
    #[arg(long, env = "HISTORY_LIMIT", default_value = "20")]
    pub history_limit: usize,

    /// Maximum number of suggestion chips returned per reply.
    #[arg(long, env = "MAX_SUGGESTIONS", default_value = "3")]
    pub max_suggestions: usize,

    /// Comma-separated list of allowed CORS origins, or "*" for any origin.
    #[arg(long, env = "ALLOWED_ORIGINS", default_value = "*")]
    pub allowed_origins: String,

    /// Optional path to a file overriding the built-in system prompt.
    #[arg(long, env = "SYSTEM_PROMPT_PATH")]
    pub system_prompt_path: Option<String>,
}

impl Args {
    /// Startup validation. Any error here is fatal before the server binds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chat_api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::InvalidTemperature(self.temperature));
        }
        if self.max_tokens == 0 {
            return Err(ConfigError::InvalidMaxTokens);
        }
        self.server_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|e| ConfigError::InvalidServerAddr(self.server_addr.clone(), e))?;
        Ok(())
    }
}
