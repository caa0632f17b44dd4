//! Test doubles and seed data shared by the scrutin integration tests.
//!
//! - [`ScriptedCompletion`]: replays queued replies and records every prompt.
//! - [`FnCompletion`]: answers through a closure (for concurrent runs).
//! - [`CountingStore`]: wraps a store and counts plan/query calls.
//! - [`seeded_store`]: a temp-file SQLite database loaded from `data/`.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use scrutin_core::errors::{CompletionError, StorageError};
use scrutin_core::models::ResultSet;
use scrutin_core::traits::{CompletionRequest, ICompletionService, IQueryStore};
use scrutin_storage::{load_results, ConstituencyRecord, QueryStore};

/// Absolute path of a file under this crate's `data/` directory.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join(relative_path)
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: serde::de::DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// The constituency records behind [`seeded_store`].
pub fn sample_records() -> Vec<ConstituencyRecord> {
    load_fixture("sample_results.json")
}

/// A loaded database in a temp directory. Keep the `TempDir` alive as long
/// as the store is used.
pub fn seeded_store() -> (tempfile::TempDir, QueryStore) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db = dir.path().join("elections.db");
    load_results(&db, &sample_records()).expect("load sample results");
    let store = QueryStore::open_path(&db, 2, 1_000).expect("open seeded store");
    (dir, store)
}

// ---------------------------------------------------------------------------
// Completion doubles
// ---------------------------------------------------------------------------

/// Completion service replaying a fixed script of replies, in order.
///
/// Once the script is exhausted every call fails with a transport error.
#[derive(Default)]
pub struct ScriptedCompletion {
    replies: Mutex<VecDeque<Result<String, CompletionError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedCompletion {
    pub fn new(replies: Vec<Result<String, CompletionError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Convenience: every reply succeeds.
    pub fn replying<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(replies.into_iter().map(|r| Ok(r.into())).collect())
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn remaining(&self) -> usize {
        self.replies.lock().unwrap().len()
    }
}

impl ICompletionService for ScriptedCompletion {
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(CompletionError::Transport {
                    reason: "script exhausted".to_string(),
                })
            })
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

type Responder = dyn Fn(&CompletionRequest) -> Result<String, CompletionError> + Send + Sync;

/// Completion service answering through a closure. Safe for concurrent runs.
pub struct FnCompletion {
    respond: Box<Responder>,
    calls: AtomicUsize,
}

impl FnCompletion {
    pub fn new<F>(respond: F) -> Self
    where
        F: Fn(&CompletionRequest) -> Result<String, CompletionError> + Send + Sync + 'static,
    {
        Self {
            respond: Box::new(respond),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ICompletionService for FnCompletion {
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.respond)(request)
    }

    fn name(&self) -> &str {
        "fn"
    }
}

/// Transport error used by tests simulating an unreachable service.
pub fn transport_error(reason: &str) -> CompletionError {
    CompletionError::Transport {
        reason: reason.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Store double
// ---------------------------------------------------------------------------

/// Wraps a store and counts calls per operation.
pub struct CountingStore {
    inner: Arc<dyn IQueryStore>,
    plans: AtomicUsize,
    queries: AtomicUsize,
}

impl CountingStore {
    pub fn new(inner: Arc<dyn IQueryStore>) -> Self {
        Self {
            inner,
            plans: AtomicUsize::new(0),
            queries: AtomicUsize::new(0),
        }
    }

    pub fn plan_calls(&self) -> usize {
        self.plans.load(Ordering::SeqCst)
    }

    pub fn query_calls(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.plan_calls() + self.query_calls()
    }
}

impl IQueryStore for CountingStore {
    fn validate_plan(&self, sql: &str) -> Result<(), StorageError> {
        self.plans.fetch_add(1, Ordering::SeqCst);
        self.inner.validate_plan(sql)
    }

    fn query(&self, sql: &str) -> Result<ResultSet, StorageError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.inner.query(sql)
    }
}

/// Store whose queries always fail after planning succeeds.
pub struct FailingQueryStore {
    inner: Arc<dyn IQueryStore>,
}

impl FailingQueryStore {
    pub fn new(inner: Arc<dyn IQueryStore>) -> Self {
        Self { inner }
    }
}

impl IQueryStore for FailingQueryStore {
    fn validate_plan(&self, sql: &str) -> Result<(), StorageError> {
        self.inner.validate_plan(sql)
    }

    fn query(&self, _sql: &str) -> Result<ResultSet, StorageError> {
        Err(StorageError::SqliteError {
            message: "database is locked".to_string(),
        })
    }
}
