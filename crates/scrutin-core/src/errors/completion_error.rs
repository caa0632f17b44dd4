/// Completion-service errors (transport and response shape).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompletionError {
    #[error("API key not found in environment variable {var}")]
    MissingApiKey { var: String },

    #[error("transport error: {reason}")]
    Transport { reason: String },

    #[error("completion service returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("malformed completion response: {reason}")]
    MalformedResponse { reason: String },

    #[error("completion service returned an empty reply")]
    EmptyReply,
}
