//! Prompt builders, one per completion-service call site.

pub mod clarification;
pub mod classification;
pub mod composition;
pub mod generation;
pub mod schema;
