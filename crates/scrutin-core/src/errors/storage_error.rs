/// Data-store errors for SQLite operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("database file not found: {path}")]
    DatabaseNotFound { path: String },

    #[error("connection pool lock poisoned")]
    PoolPoisoned,
}
