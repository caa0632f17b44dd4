/// Example-corpus loading errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("failed to read example corpus {path}: {reason}")]
    CorpusUnreadable { path: String, reason: String },

    #[error("invalid example corpus: {reason}")]
    InvalidCorpus { reason: String },
}
