pub mod prompt;

use thiserror::Error;

/// Startup configuration failures. All of these prevent the process from
/// serving traffic.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DASHSCOPE_API_KEY is not set; the provider cannot be called without it")]
    MissingApiKey,

    #[error("temperature {0} is out of range (expected 0.0 to 2.0)")]
    InvalidTemperature(f32),

    #[error("max-tokens must be greater than zero")]
    InvalidMaxTokens,

    #[error("invalid server address '{0}': {1}")]
    InvalidServerAddr(String, std::net::AddrParseError),

    #[error("failed to read system prompt file '{0}': {1}")]
    PromptFile(String, std::io::Error),

    #[error("system prompt file '{0}' is empty")]
    EmptyPromptFile(String),

    #[error("API key contains characters that are not valid in an HTTP header")]
    InvalidApiKey,

    #[error("failed to build HTTP client: {0}")]
    HttpClient(reqwest::Error),
}
