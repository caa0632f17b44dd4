//! Data model of a single pipeline run.

pub mod candidate;
pub mod chart;
pub mod classification;
pub mod error_log;
pub mod output;
pub mod request;
pub mod result_set;
pub mod retrieval;

pub use candidate::CandidateQuery;
pub use chart::ChartArtifact;
pub use classification::{ChartType, Classification, QueryNature, RequestValidity, Route, TaskType};
pub use error_log::ErrorLog;
pub use output::{PipelineOutput, Terminal};
pub use request::Request;
pub use result_set::{Record, ResultSet, Value};
pub use retrieval::{ExampleMatch, RetrievalContext};
