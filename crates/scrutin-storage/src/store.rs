//! Read-only query execution against the election database.

use std::path::{Path, PathBuf};

use rusqlite::types::ValueRef;
use rusqlite::Connection;
use tracing::debug;

use scrutin_core::config::StorageConfig;
use scrutin_core::errors::StorageError;
use scrutin_core::models::{Record, ResultSet, Value};
use scrutin_core::traits::IQueryStore;

use crate::pool::ReadPool;
use crate::to_storage_err;

/// `IQueryStore` over a pool of read-only connections.
pub struct QueryStore {
    pool: ReadPool,
    path: PathBuf,
}

impl QueryStore {
    pub fn open(config: &StorageConfig) -> Result<Self, StorageError> {
        Self::open_path(
            Path::new(&config.db_path),
            config.read_pool_size,
            config.busy_timeout_ms,
        )
    }

    pub fn open_path(
        path: &Path,
        read_pool_size: usize,
        busy_timeout_ms: u64,
    ) -> Result<Self, StorageError> {
        let pool = ReadPool::open(path, read_pool_size, busy_timeout_ms)?;
        debug!(path = %path.display(), connections = pool.size(), "query store opened");
        Ok(Self {
            pool,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn pool(&self) -> &ReadPool {
        &self.pool
    }
}

impl IQueryStore for QueryStore {
    fn validate_plan(&self, sql: &str) -> Result<(), StorageError> {
        self.pool.with_conn(|conn| explain(conn, sql))
    }

    fn query(&self, sql: &str) -> Result<ResultSet, StorageError> {
        self.pool.with_conn(|conn| materialize(conn, sql))
    }
}

fn explain(conn: &Connection, sql: &str) -> Result<(), StorageError> {
    let mut stmt = conn
        .prepare(&format!("EXPLAIN QUERY PLAN {sql}"))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let mut rows = stmt.query([]).map_err(|e| to_storage_err(e.to_string()))?;
    while rows
        .next()
        .map_err(|e| to_storage_err(e.to_string()))?
        .is_some()
    {}
    Ok(())
}

fn materialize(conn: &Connection, sql: &str) -> Result<ResultSet, StorageError> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();

    let mut rows = stmt.query([]).map_err(|e| to_storage_err(e.to_string()))?;
    let mut records = Vec::new();
    while let Some(row) = rows.next().map_err(|e| to_storage_err(e.to_string()))? {
        let mut record = Record::new();
        for (i, column) in columns.iter().enumerate() {
            let value = row
                .get_ref(i)
                .map_err(|e| to_storage_err(e.to_string()))?;
            record.push(column.clone(), to_value(value));
        }
        records.push(record);
    }

    debug!(rows = records.len(), "query materialized");
    Ok(ResultSet::new(records))
}

fn to_value(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(r) => Value::Real(r),
        ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Value::Blob(b.to_vec()),
    }
}
