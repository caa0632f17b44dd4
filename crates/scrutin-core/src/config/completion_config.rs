use serde::{Deserialize, Serialize};

use super::defaults;

/// Completion-service client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Base URL of an OpenAI-compatible chat completions API.
    pub endpoint: String,
    pub model: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    pub temperature: f64,
    pub timeout_secs: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::DEFAULT_COMPLETION_ENDPOINT.to_string(),
            model: defaults::DEFAULT_COMPLETION_MODEL.to_string(),
            api_key_env: defaults::DEFAULT_API_KEY_ENV.to_string(),
            temperature: defaults::DEFAULT_TEMPERATURE,
            timeout_secs: defaults::DEFAULT_TIMEOUT_SECS,
        }
    }
}
