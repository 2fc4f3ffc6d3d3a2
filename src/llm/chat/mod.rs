pub mod openai;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use self::openai::OpenAiChatClient;
use super::LlmConfig;
use crate::config::ConfigError;
use crate::conversation::Turn;

/// Failures from the upstream model provider. All of them surface to the
/// caller as a 5xx; none are retried here.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("chat provider request failed: {0}")]
    Http(reqwest::Error),

    #[error("chat provider call timed out")]
    Timeout,

    #[error("chat provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("chat provider returned no completion choices")]
    EmptyResponse,
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else {
            ProviderError::Http(err)
        }
    }
}

/// Seam for the external model call. The assembled turn sequence is passed
/// through unmodified; implementations only own transport and wire shape.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, turns: &[Turn]) -> Result<String, ProviderError>;

    fn model(&self) -> &str;
}

pub fn new_client(config: &LlmConfig) -> Result<Arc<dyn ChatClient>, ConfigError> {
    let client = OpenAiChatClient::new(config)?;
    Ok(Arc::new(client))
}
