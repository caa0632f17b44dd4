//! Static and plan-level checks on a candidate query.
//!
//! Checks run in order and the first failure wins:
//! empty candidate, forbidden statement keyword, unknown schema object,
//! then `EXPLAIN QUERY PLAN` against the read-only store.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use scrutin_core::constants::{ALLOWED_OBJECTS, FORBIDDEN_STATEMENTS, NON_OBJECT_KEYWORDS};
use scrutin_core::errors::VerificationError;
use scrutin_core::traits::IQueryStore;
use tracing::debug;

static RE_FORBIDDEN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b", FORBIDDEN_STATEMENTS.join("|"))).ok()
});

static RE_STRING_LITERAL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"'(?:[^']|'')*'").ok());

/// `FROM`/`JOIN` followed by a quoted identifier, a bare (possibly
/// schema-qualified) identifier, or an opening parenthesis.
static RE_SOURCE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)\b(?:FROM|JOIN)\s+(?:"([^"]+)"|`([^`]+)`|\[([^\]]+)\]|([A-Za-z_][A-Za-z0-9_$]*(?:\.[A-Za-z_][A-Za-z0-9_$]*)?)|(\())"#,
    )
    .ok()
});

static RE_CTE_NAME: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(?:\bWITH(?:\s+RECURSIVE)?|,)\s*"?([A-Za-z_][A-Za-z0-9_]*)"?\s*(?:\([^()]*\)\s*)?AS\s+(?:NOT\s+)?(?:MATERIALIZED\s+)?\("#,
    )
    .ok()
});

/// Runs every pre-execution check on a candidate.
pub struct QueryVerifier {
    store: Arc<dyn IQueryStore>,
}

impl QueryVerifier {
    pub fn new(store: Arc<dyn IQueryStore>) -> Self {
        Self { store }
    }

    pub fn verify(&self, candidate: Option<&str>) -> Result<(), VerificationError> {
        let sql = match candidate.map(str::trim) {
            Some(sql) if !sql.is_empty() => sql,
            _ => return Err(VerificationError::EmptyCandidate),
        };

        if let Some(keyword) = forbidden_keyword(sql) {
            return Err(VerificationError::ForbiddenStatement { keyword });
        }

        if let Some(object) = unknown_object(sql) {
            return Err(VerificationError::SchemaHallucination { object });
        }

        self.store
            .validate_plan(sql)
            .map_err(|e| VerificationError::Syntax {
                message: e.to_string(),
            })?;

        debug!("candidate verified");
        Ok(())
    }
}

/// First forbidden statement keyword in `sql`, upper-cased. Scans the raw
/// text, string literals included.
pub fn forbidden_keyword(sql: &str) -> Option<String> {
    match RE_FORBIDDEN.as_ref() {
        Some(re) => re.find(sql).map(|m| m.as_str().to_ascii_uppercase()),
        None => Some("<unavailable>".to_string()),
    }
}

/// Names following `FROM`/`JOIN`, lower-cased, in order of appearance.
/// Parenthesized sources and non-object keywords are skipped; string
/// literals are blanked first.
pub fn referenced_objects(sql: &str) -> Vec<String> {
    let (Some(re_literal), Some(re_source)) = (RE_STRING_LITERAL.as_ref(), RE_SOURCE.as_ref())
    else {
        return Vec::new();
    };
    let stripped = re_literal.replace_all(sql, "''");

    re_source
        .captures_iter(&stripped)
        .filter(|caps| caps.get(5).is_none())
        .filter_map(|caps| (1..=4).find_map(|i| caps.get(i)))
        .map(|m| {
            let name = m.as_str().trim();
            // `main.candidats` names `candidats`.
            let name = name.rsplit('.').next().unwrap_or(name);
            name.to_ascii_lowercase()
        })
        .filter(|name| {
            !NON_OBJECT_KEYWORDS
                .iter()
                .any(|kw| kw.eq_ignore_ascii_case(name))
        })
        .collect()
}

/// Names declared by the statement's own `WITH` clause, lower-cased.
pub fn cte_names(sql: &str) -> HashSet<String> {
    let Some(re) = RE_CTE_NAME.as_ref() else {
        return HashSet::new();
    };
    re.captures_iter(sql)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_ascii_lowercase())
        .collect()
}

fn unknown_object(sql: &str) -> Option<String> {
    let ctes = cte_names(sql);
    referenced_objects(sql)
        .into_iter()
        .find(|name| !ctes.contains(name) && !ALLOWED_OBJECTS.iter().any(|o| *o == name.as_str()))
}
