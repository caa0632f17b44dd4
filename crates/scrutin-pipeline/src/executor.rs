use std::sync::Arc;

use scrutin_core::errors::StorageError;
use scrutin_core::models::ResultSet;
use scrutin_core::traits::IQueryStore;
use tracing::{debug, warn};

/// Runs a verified query exactly once. No retry.
pub struct QueryExecutor {
    store: Arc<dyn IQueryStore>,
}

impl QueryExecutor {
    pub fn new(store: Arc<dyn IQueryStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self, sql: &str) -> Result<ResultSet, StorageError> {
        match self.store.query(sql) {
            Ok(rows) => {
                debug!(rows = rows.len(), "query executed");
                Ok(rows)
            }
            Err(e) => {
                warn!(error = %e, "query execution failed");
                Err(e)
            }
        }
    }
}
