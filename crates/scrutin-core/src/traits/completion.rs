use crate::errors::CompletionError;

/// Output shape the caller expects from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Text,
    /// A single JSON object.
    JsonObject,
}

/// One prompt sent to the completion service.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub format: ResponseFormat,
}

impl CompletionRequest {
    pub fn text(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            format: ResponseFormat::Text,
        }
    }

    pub fn json(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            format: ResponseFormat::JsonObject,
        }
    }
}

/// Language-model completion service. One blocking round trip per call.
pub trait ICompletionService: Send + Sync {
    /// Return the raw text of the model's reply.
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;

    /// Human-readable service name.
    fn name(&self) -> &str;
}
