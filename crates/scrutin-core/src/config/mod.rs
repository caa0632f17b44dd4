//! Configuration system for scrutin.
//! TOML-based, 3-layer resolution: env > project file > compiled defaults.

pub mod completion_config;
pub mod defaults;
pub mod observability_config;
pub mod pipeline_config;
pub mod retrieval_config;
pub mod scrutin_config;
pub mod storage_config;

pub use completion_config::CompletionConfig;
pub use observability_config::ObservabilityConfig;
pub use pipeline_config::{AmbiguityPolicy, PipelineConfig};
pub use retrieval_config::RetrievalConfig;
pub use scrutin_config::ScrutinConfig;
pub use storage_config::StorageConfig;
