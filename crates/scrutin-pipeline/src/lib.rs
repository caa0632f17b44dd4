//! # scrutin-pipeline
//!
//! Turns a French question about the Ivorian legislative results into an
//! answer: lexical guardrail, intent classification, example retrieval,
//! bounded generate/verify loop, read-only execution, optional chart, and
//! answer composition.

pub mod chart;
pub mod clarification;
pub mod classifier;
pub mod composer;
pub mod engine;
pub mod executor;
pub mod generator;
pub mod messages;
pub mod prompts;
pub mod state;
pub mod verifier;

pub use chart::SvgChartRenderer;
pub use engine::Pipeline;
pub use generator::sanitize_completion;
pub use state::RunState;
pub use verifier::QueryVerifier;
