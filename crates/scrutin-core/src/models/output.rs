use serde::Serialize;

use super::{ChartArtifact, ResultSet};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Terminal {
    PolicyRefusal,
    OutOfScopeRefusal,
    Clarification,
    GenerationFailed,
    ExecutionFailed,
    NoResults,
    Answered,
    CompositionFailed,
}

impl Terminal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PolicyRefusal => "policy_refusal",
            Self::OutOfScopeRefusal => "out_of_scope_refusal",
            Self::Clarification => "clarification",
            Self::GenerationFailed => "generation_failed",
            Self::ExecutionFailed => "execution_failed",
            Self::NoResults => "no_results",
            Self::Answered => "answered",
            Self::CompositionFailed => "composition_failed",
        }
    }
}

/// Everything a caller receives for one question.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutput {
    pub run_id: String,
    pub final_answer: String,
    pub result_rows: ResultSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartArtifact>,
    pub errors: Vec<String>,
    pub terminal: Terminal,
    /// Generation attempts made (0 when the run ended before generation).
    pub attempts: u32,
    /// SQL that passed verification, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sql: Option<String>,
}
