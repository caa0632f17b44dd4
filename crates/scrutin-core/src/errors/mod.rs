//! Error handling for scrutin.
//! One error enum per subsystem, `thiserror` only.

pub mod completion_error;
pub mod config_error;
pub mod render_error;
pub mod retrieval_error;
pub mod stage_error;
pub mod storage_error;
pub mod verification_error;

pub use completion_error::CompletionError;
pub use config_error::ConfigError;
pub use render_error::RenderError;
pub use retrieval_error::RetrievalError;
pub use stage_error::StageError;
pub use storage_error::StorageError;
pub use verification_error::VerificationError;

/// Top-level error for fallible construction and I/O outside a pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum ScrutinError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("completion error: {0}")]
    Completion(#[from] CompletionError),

    #[error("retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ScrutinResult<T> = Result<T, ScrutinError>;
