use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{ChatClient, ProviderError};
use crate::config::ConfigError;
use crate::conversation::Turn;
use crate::llm::LlmConfig;

/// Client for any OpenAI-compatible chat completions endpoint; the default
/// deployment points it at DashScope compatible-mode.
pub struct OpenAiChatClient {
    http: HttpClient,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Turn],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: String,
}

impl OpenAiChatClient {
    pub fn new(config: &LlmConfig) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", config.api_key))
                .map_err(|_| ConfigError::InvalidApiKey)?,
        );

        let http = HttpClient::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }
}

#[async_trait]
impl ChatClient for OpenAiChatClient {
    async fn complete(&self, turns: &[Turn]) -> Result<String, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url);
        let req = ChatCompletionRequest {
            model: &self.model,
            messages: turns,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        debug!("Calling {} with {} turns", url, turns.len());
        let resp = self.http.post(&url).json(&req).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!("Provider returned {}: {}", status, body);
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = resp.json::<ChatCompletionResponse>().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ProviderError::EmptyResponse)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
