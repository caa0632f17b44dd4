use scrutin_core::errors::StageError;
use tracing::{debug, warn};

use crate::patterns::{self, DenyCategory};

/// Fixed answer returned when the guardrail blocks a question.
pub const REFUSAL_MESSAGE: &str = "Désolé, votre requête semble contenir des opérations non autorisées. \
Je ne peux répondre qu'à des questions d'analyse et de consultation des données électorales.";

/// Guardrail decision for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardrailVerdict {
    /// Nothing matched; continue to classification.
    Pass,
    /// A denylisted token matched. `token` is the canonical lower-case entry.
    Blocked {
        token: &'static str,
        category: DenyCategory,
    },
}

impl GuardrailVerdict {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }

    /// Error-log entry for a blocked question.
    pub fn to_stage_error(&self) -> Option<StageError> {
        match self {
            Self::Pass => None,
            Self::Blocked { token, .. } => Some(StageError::SecurityViolation {
                token: (*token).to_string(),
            }),
        }
    }
}

/// Case-insensitive, whole-word denylist scan. Stateless and pure.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexicalGuardrail;

impl LexicalGuardrail {
    pub fn new() -> Self {
        Self
    }

    /// Scan `text`; the earliest match in the text wins.
    pub fn check(&self, text: &str) -> GuardrailVerdict {
        if text.trim().is_empty() {
            return GuardrailVerdict::Pass;
        }

        let Some(re) = patterns::RE_DENYLIST.as_ref() else {
            // An uncompilable denylist must not let everything through silently.
            warn!("guardrail denylist failed to compile; blocking request");
            return GuardrailVerdict::Blocked {
                token: "<denylist unavailable>",
                category: DenyCategory::SecurityProbe,
            };
        };

        match re.find(text).and_then(|m| patterns::lookup(m.as_str())) {
            Some(entry) => {
                debug!(token = entry.token, category = ?entry.category, "guardrail blocked request");
                GuardrailVerdict::Blocked {
                    token: entry.token,
                    category: entry.category,
                }
            }
            None => GuardrailVerdict::Pass,
        }
    }
}
