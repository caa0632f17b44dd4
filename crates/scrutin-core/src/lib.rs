//! # scrutin-core
//!
//! Foundation crate for the scrutin pipeline.
//! Defines the run data model, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ScrutinConfig;
pub use errors::{ScrutinError, ScrutinResult, StageError};
pub use models::{
    ChartArtifact, ChartType, Classification, ErrorLog, PipelineOutput, QueryNature, Record,
    Request, RequestValidity, ResultSet, RetrievalContext, Route, Terminal, Value,
};
