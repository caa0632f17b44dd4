//! # scrutin-observability
//!
//! Structured logging setup, span definitions for the pipeline stages, and
//! an in-memory log of completed runs.

pub mod run_log;
pub mod tracing_setup;

pub use run_log::{RunLog, RunLogEntry, RunLogSummary};
pub use tracing_setup::init_tracing;
