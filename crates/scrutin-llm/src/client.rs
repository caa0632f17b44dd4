//! Blocking HTTP client for the completion service.

use std::time::Duration;

use tracing::{debug, warn};

use scrutin_core::config::CompletionConfig;
use scrutin_core::errors::CompletionError;
use scrutin_core::traits::{CompletionRequest, ICompletionService, ResponseFormat};

use crate::protocol::{ChatMessage, ChatRequest, ChatResponse, ResponseFormatSpec};

/// Longest error body kept in a `CompletionError::Http`.
const MAX_ERROR_BODY: usize = 512;

/// `ICompletionService` backed by `POST {endpoint}/chat/completions`.
pub struct ChatCompletionClient {
    http: reqwest::blocking::Client,
    url: String,
    model: String,
    temperature: f64,
    api_key: String,
}

impl ChatCompletionClient {
    /// Build a client, reading the API key from `config.api_key_env`.
    pub fn from_config(config: &CompletionConfig) -> Result<Self, CompletionError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| CompletionError::MissingApiKey {
                var: config.api_key_env.clone(),
            })?;
        Self::with_api_key(config, api_key)
    }

    pub fn with_api_key(
        config: &CompletionConfig,
        api_key: impl Into<String>,
    ) -> Result<Self, CompletionError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CompletionError::Transport {
                reason: e.to_string(),
            })?;
        Ok(Self {
            http,
            url: format!("{}/chat/completions", config.endpoint.trim_end_matches('/')),
            model: config.model.clone(),
            temperature: config.temperature,
            api_key: api_key.into(),
        })
    }

    fn body(&self, request: &CompletionRequest) -> ChatRequest {
        let mut messages = Vec::with_capacity(2);
        if !request.system.is_empty() {
            messages.push(ChatMessage::system(request.system.as_str()));
        }
        messages.push(ChatMessage::user(request.user.as_str()));
        ChatRequest {
            model: self.model.clone(),
            messages,
            temperature: self.temperature,
            response_format: match request.format {
                ResponseFormat::JsonObject => Some(ResponseFormatSpec::json_object()),
                ResponseFormat::Text => None,
            },
        }
    }
}

impl ICompletionService for ChatCompletionClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        debug!(model = %self.model, format = ?request.format, "completion request");

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&self.body(request))
            .send()
            .map_err(|e| CompletionError::Transport {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let cut = (0..=MAX_ERROR_BODY)
                    .rev()
                    .find(|&i| body.is_char_boundary(i))
                    .unwrap_or(0);
                body.truncate(cut);
            }
            warn!(status = status.as_u16(), "completion service rejected request");
            return Err(CompletionError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse =
            response
                .json()
                .map_err(|e| CompletionError::MalformedResponse {
                    reason: e.to_string(),
                })?;
        parsed
            .first_text()
            .map(str::to_string)
            .ok_or(CompletionError::EmptyReply)
    }

    fn name(&self) -> &str {
        &self.model
    }
}
