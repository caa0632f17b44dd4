use std::sync::Arc;

use scrutin_core::errors::StageError;
use scrutin_core::traits::ICompletionService;

use crate::prompts;

/// Turns an ambiguous question into a follow-up question for the user.
pub struct ClarificationComposer {
    service: Arc<dyn ICompletionService>,
}

impl ClarificationComposer {
    pub fn new(service: Arc<dyn ICompletionService>) -> Self {
        Self { service }
    }

    pub fn clarify(&self, question: &str, reasoning: &str) -> Result<String, StageError> {
        let request = prompts::clarification::build(question, reasoning);
        let reply = self
            .service
            .complete(&request)
            .map_err(|e| StageError::Clarification(e.to_string()))?;
        match reply.trim() {
            "" => Err(StageError::Clarification("empty reply".to_string())),
            text => Ok(text.to_string()),
        }
    }
}
