//! Errors recorded in a run's `ErrorLog`.

use super::{CompletionError, RenderError, StorageError, VerificationError};

/// One entry of a run's error log.
///
/// Only `Generation` and `Verification` entries are produced inside the
/// bounded retry loop; every other variant either ends the run or is
/// swallowed by the stage that produced it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StageError {
    #[error("classification failed: {0}")]
    Classification(String),

    #[error("forbidden keyword detected: '{token}'")]
    SecurityViolation { token: String },

    #[error("query generation failed: {0}")]
    Generation(CompletionError),

    #[error("{0}")]
    Verification(#[from] VerificationError),

    #[error("execution error: {0}")]
    Execution(StorageError),

    #[error("chart error: {0}")]
    Render(#[from] RenderError),

    #[error("answer composition failed: {0}")]
    Composition(String),

    #[error("clarification failed: {0}")]
    Clarification(String),
}

impl StageError {
    /// Whether this error was produced by the generation/verification loop.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Generation(_) | Self::Verification(_))
    }

    /// Short stable label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Classification(_) => "classification",
            Self::SecurityViolation { .. } => "security_violation",
            Self::Generation(_) => "generation",
            Self::Verification(VerificationError::EmptyCandidate) => "empty_candidate",
            Self::Verification(VerificationError::ForbiddenStatement { .. }) => "forbidden_statement",
            Self::Verification(VerificationError::SchemaHallucination { .. }) => {
                "schema_hallucination"
            }
            Self::Verification(VerificationError::Syntax { .. }) => "syntax",
            Self::Execution(_) => "execution",
            Self::Render(_) => "render",
            Self::Composition(_) => "composition",
            Self::Clarification(_) => "clarification",
        }
    }
}
