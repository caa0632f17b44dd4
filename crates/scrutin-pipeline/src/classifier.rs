//! Intent classification through the completion service.

use std::sync::Arc;

use scrutin_core::config::AmbiguityPolicy;
use scrutin_core::errors::StageError;
use scrutin_core::models::Classification;
use scrutin_core::traits::ICompletionService;
use scrutin_llm::parse_structured;
use tracing::debug;

use crate::prompts;

/// Asks the model for a structured verdict on one question.
///
/// Never falls back on its own; the pipeline decides what a failure means.
pub struct IntentClassifier {
    service: Arc<dyn ICompletionService>,
    policy: AmbiguityPolicy,
}

impl IntentClassifier {
    pub fn new(service: Arc<dyn ICompletionService>, policy: AmbiguityPolicy) -> Self {
        Self { service, policy }
    }

    pub fn policy(&self) -> AmbiguityPolicy {
        self.policy
    }

    /// Classify `question`. Transport and parse failures both map to
    /// `StageError::Classification`.
    pub fn classify(&self, question: &str) -> Result<Classification, StageError> {
        let request = prompts::classification::build(question, self.policy);
        let reply = self
            .service
            .complete(&request)
            .map_err(|e| StageError::Classification(e.to_string()))?;

        let classification: Classification =
            parse_structured(&reply).map_err(|e| StageError::Classification(e.to_string()))?;

        debug!(
            validity = ?classification.validity,
            nature = classification.query_nature.as_str(),
            chart = ?classification.chart_type,
            "question classified"
        );
        Ok(classification)
    }
}
