//! SQL candidate generation and reply sanitizing.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use scrutin_core::errors::CompletionError;
use scrutin_core::traits::ICompletionService;
use tracing::debug;

use crate::prompts::generation::{self, GenerationInput};

static RE_FENCE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?i)```(?:sqlite|sql)?").ok());
static RE_STATEMENT_START: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:SELECT|WITH)\b").ok());

/// Produces one candidate query per call.
pub struct QueryGenerator {
    service: Arc<dyn ICompletionService>,
}

impl QueryGenerator {
    pub fn new(service: Arc<dyn ICompletionService>) -> Self {
        Self { service }
    }

    /// One completion round trip. `Ok(None)` when the reply held no statement.
    pub fn generate(&self, input: &GenerationInput<'_>) -> Result<Option<String>, CompletionError> {
        let request = generation::build(input);
        let raw = self.service.complete(&request)?;
        let sql = sanitize_completion(&raw);
        debug!(candidate = sql.as_deref().unwrap_or(""), "candidate generated");
        Ok(sql)
    }
}

/// Reduce a model reply to a single bare statement.
///
/// Strips code fences, drops everything before the first `SELECT`/`WITH`,
/// truncates at the first `;` and trims. `None` if nothing is left.
pub fn sanitize_completion(raw: &str) -> Option<String> {
    let unfenced = match RE_FENCE.as_ref() {
        Some(re) => re.replace_all(raw, "").into_owned(),
        None => raw.replace("```", ""),
    };

    let start = RE_STATEMENT_START
        .as_ref()
        .and_then(|re| re.find(&unfenced))
        .map_or(0, |m| m.start());
    let statement = &unfenced[start..];
    let statement = statement.split(';').next().unwrap_or_default().trim();

    (!statement.is_empty()).then(|| statement.to_string())
}
