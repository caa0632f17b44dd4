//! # scrutin-storage
//!
//! SQLite access for the election results: a pool of read-only connections
//! behind [`QueryStore`], the schema and analytic views, and the loader that
//! populates a fresh database from extracted records.

pub mod loader;
pub mod pool;
pub mod schema;
pub mod store;

pub use loader::{load_results, CandidateRecord, ConstituencyRecord, LoadSummary};
pub use pool::ReadPool;
pub use store::QueryStore;

use scrutin_core::errors::StorageError;

/// Helper to convert a rusqlite error message into a `StorageError`.
pub(crate) fn to_storage_err(msg: String) -> StorageError {
    StorageError::SqliteError { message: msg }
}
