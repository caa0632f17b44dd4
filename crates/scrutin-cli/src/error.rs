use scrutin_core::errors::{ScrutinError, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Scrutin(#[from] ScrutinError),
}

impl From<StorageError> for CliError {
    fn from(e: StorageError) -> Self {
        Self::Scrutin(e.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Scrutin(e.into())
    }
}
