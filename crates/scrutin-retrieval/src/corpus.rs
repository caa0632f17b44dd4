//! The worked-example corpus.

use std::path::Path;

use serde::{Deserialize, Serialize};

use scrutin_core::errors::RetrievalError;

static BUILTIN_CORPUS: &str = include_str!("../data/few_shot_examples.json");

/// A question with the SQL that answers it and the reasoning behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub question: String,
    #[serde(alias = "sql_query")]
    pub sql: String,
    #[serde(default, alias = "explication")]
    pub explanation: String,
}

/// Ordered example list. Order is significant: it breaks score ties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    examples: Vec<Example>,
}

impl Corpus {
    pub fn new(examples: Vec<Example>) -> Self {
        Self { examples }
    }

    /// The examples shipped with the crate.
    pub fn builtin() -> Result<Self, RetrievalError> {
        Self::from_json(BUILTIN_CORPUS)
    }

    /// Parse a JSON array of examples.
    pub fn from_json(json: &str) -> Result<Self, RetrievalError> {
        let examples: Vec<Example> =
            serde_json::from_str(json).map_err(|e| RetrievalError::InvalidCorpus {
                reason: e.to_string(),
            })?;
        Ok(Self { examples })
    }

    pub fn from_path(path: &Path) -> Result<Self, RetrievalError> {
        let json = std::fs::read_to_string(path).map_err(|e| RetrievalError::CorpusUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn get(&self, index: usize) -> Option<&Example> {
        self.examples.get(index)
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}
