//! PRAGMA configuration for reader and loader connections.

use rusqlite::Connection;

use scrutin_core::errors::StorageError;

use crate::to_storage_err;

/// Lock a reader down: `query_only` rejects any write at the engine level,
/// on top of the read-only open flag.
pub fn apply_read_pragmas(conn: &Connection, busy_timeout_ms: u64) -> Result<(), StorageError> {
    conn.execute_batch(&format!(
        "
        PRAGMA query_only = ON;
        PRAGMA busy_timeout = {busy_timeout_ms};
        PRAGMA cache_size = -16000;
        "
    ))
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Pragmas for the loader's single writable connection.
pub fn apply_write_pragmas(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "
        PRAGMA foreign_keys = ON;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Whether `query_only` is active on a connection.
pub fn verify_query_only(conn: &Connection) -> Result<bool, StorageError> {
    let on: i64 = conn
        .pragma_query_value(None, "query_only", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(on == 1)
}
