//! # scrutin-guardrail
//!
//! Pre-classification lexical filter. Blocks questions containing data-mutation
//! verbs, destructive SQL keywords, or security-probe phrases before any
//! completion-service call is made.

pub mod engine;
pub mod patterns;

pub use engine::{GuardrailVerdict, LexicalGuardrail};
pub use patterns::{DenyCategory, DenyToken};
