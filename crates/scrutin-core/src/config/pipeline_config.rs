use serde::{Deserialize, Serialize};

use super::defaults;

/// How the classifier is told to treat borderline questions.
///
/// The language model decides; this only selects the instruction it gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityPolicy {
    /// Interpret generously; "ambiguous" only when no reasonable query exists.
    #[default]
    PreferAllowed,
    /// Ask for clarification whenever a place or entity is underspecified.
    PreferAmbiguous,
}

/// Pipeline stage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Default LIMIT the generator is told to apply.
    pub row_limit: usize,
    /// Rows shown to the answer composer.
    pub composer_max_rows: usize,
    pub ambiguity_policy: AmbiguityPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            row_limit: defaults::DEFAULT_ROW_LIMIT,
            composer_max_rows: defaults::DEFAULT_COMPOSER_MAX_ROWS,
            ambiguity_policy: AmbiguityPolicy::default(),
        }
    }
}
