use crate::errors::StorageError;
use crate::models::ResultSet;

/// Read-only access to the election data store.
pub trait IQueryStore: Send + Sync {
    /// Compile and plan `sql` without producing rows.
    fn validate_plan(&self, sql: &str) -> Result<(), StorageError>;

    /// Run `sql` once and materialize every row.
    fn query(&self, sql: &str) -> Result<ResultSet, StorageError>;
}
