//! Final answer composition from the materialized rows.

use std::fmt::Write as _;
use std::sync::Arc;

use scrutin_core::errors::StageError;
use scrutin_core::models::ResultSet;
use scrutin_core::text::normalize;
use scrutin_core::traits::ICompletionService;
use tracing::debug;

use crate::messages;
use crate::prompts;

/// Column holding the constituency display name.
const CONSTITUENCY_COLUMN: &str = "nom_circonscription";

/// Trailing words that distinguish sibling constituencies of one town.
const SUB_ENTITY_SUFFIXES: [&str; 4] = [" sous-prefecture", " sous prefecture", " s/p", " commune"];

pub struct AnswerComposer {
    service: Arc<dyn ICompletionService>,
    max_rows: usize,
}

impl AnswerComposer {
    pub fn new(service: Arc<dyn ICompletionService>, max_rows: usize) -> Self {
        Self { service, max_rows }
    }

    /// Empty rows yield the fixed no-results message without a model call.
    pub fn compose(&self, question: &str, rows: &ResultSet) -> Result<String, StageError> {
        if rows.is_empty() {
            return Ok(messages::NO_RESULTS.to_string());
        }

        let table = markdown_table(rows, self.max_rows);
        let groups = sub_entity_groups(rows);
        if !groups.is_empty() {
            debug!(groups = groups.len(), "rows span sibling constituencies");
        }

        let request = prompts::composition::build(question, &table, &groups);
        let reply = self
            .service
            .complete(&request)
            .map_err(|e| StageError::Composition(e.to_string()))?;

        let answer = reply.trim();
        if answer.is_empty() {
            return Err(StageError::Composition("empty reply".to_string()));
        }
        Ok(answer.to_string())
    }
}

/// First `max_rows` rows as a Markdown table, columns in select-list order.
pub fn markdown_table(rows: &ResultSet, max_rows: usize) -> String {
    let columns = rows.columns();
    if columns.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    let _ = writeln!(out, "| {} |", columns.iter().map(|c| cell(c)).collect::<Vec<_>>().join(" | "));
    let _ = writeln!(out, "|{}", " --- |".repeat(columns.len()));

    for record in rows.iter().take(max_rows) {
        // Positional: a join may select two columns under the same name.
        let cells: Vec<String> = (0..columns.len())
            .map(|i| {
                record
                    .fields()
                    .get(i)
                    .map(|(_, v)| cell(&v.to_string()))
                    .unwrap_or_default()
            })
            .collect();
        let _ = writeln!(out, "| {} |", cells.join(" | "));
    }

    if rows.len() > max_rows {
        let _ = writeln!(out, "\n({} lignes au total, {} affichées)", rows.len(), max_rows);
    }
    out
}

/// Distinct constituency names that share a base name once the
/// commune/sous-préfecture suffix is removed. One inner list per base,
/// names in order of first appearance; singleton bases are omitted.
pub fn sub_entity_groups(rows: &ResultSet) -> Vec<Vec<String>> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();

    for name in rows
        .iter()
        .filter_map(|r| r.get(CONSTITUENCY_COLUMN))
        .filter_map(|v| v.as_str())
    {
        let base = base_name(name);
        match groups.iter_mut().find(|(b, _)| *b == base) {
            Some((_, names)) => {
                if !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
            }
            None => groups.push((base, vec![name.to_string()])),
        }
    }

    groups
        .into_iter()
        .filter(|(_, names)| names.len() > 1)
        .map(|(_, names)| names)
        .collect()
}

fn base_name(name: &str) -> String {
    let normalized = normalize(name);
    SUB_ENTITY_SUFFIXES
        .iter()
        .find_map(|suffix| normalized.strip_suffix(suffix))
        .unwrap_or(normalized.as_str())
        .trim()
        .to_string()
}

fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrutin_core::models::{Record, Value};

    fn row(circo: &str, nom: &str, voix: i64) -> Record {
        Record::new()
            .with("nom_circonscription", Value::Text(circo.into()))
            .with("nom_liste_candidat", Value::Text(nom.into()))
            .with("score_voix", Value::Integer(voix))
    }

    #[test]
    fn table_keeps_column_order_and_caps_rows() {
        let rows = ResultSet::new((0..20).map(|i| row("X", "Y", i)).collect());
        let table = markdown_table(&rows, 15);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "| nom_circonscription | nom_liste_candidat | score_voix |");
        assert_eq!(lines[1], "| --- | --- | --- |");
        assert_eq!(lines[2], "| X | Y | 0 |");
        assert_eq!(table.matches("| X |").count(), 15);
        assert!(table.contains("(20 lignes au total, 15 affichées)"));
    }

    #[test]
    fn duplicate_column_names_keep_their_own_values() {
        let rows = ResultSet::new(vec![Record::new()
            .with("nom_circonscription", Value::Text("AGBOVILLE COMMUNE".into()))
            .with("nom_circonscription", Value::Text("BOUAKE COMMUNE".into()))]);
        let table = markdown_table(&rows, 15);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "| nom_circonscription | nom_circonscription |");
        assert_eq!(lines[2], "| AGBOVILLE COMMUNE | BOUAKE COMMUNE |");
    }

    #[test]
    fn pipes_are_escaped() {
        let rows = ResultSet::new(vec![row("A|B", "C", 1)]);
        assert!(markdown_table(&rows, 15).contains("| A\\|B |"));
    }

    #[test]
    fn detects_commune_and_sous_prefecture_siblings() {
        let rows = ResultSet::new(vec![
            row("AGBOVILLE COMMUNE", "ACHI ANNE-MARIE", 10),
            row("AGBOVILLE SOUS-PREFECTURE", "YAPI ÉTIENNE", 9),
            row("AGBOVILLE COMMUNE", "AUTRE", 3),
            row("BOUAKE COMMUNE", "KOUAME AMANI JEAN", 8),
        ]);
        assert_eq!(
            sub_entity_groups(&rows),
            vec![vec![
                "AGBOVILLE COMMUNE".to_string(),
                "AGBOVILLE SOUS-PREFECTURE".to_string()
            ]]
        );
    }

    #[test]
    fn no_groups_without_constituency_column() {
        let rows = ResultSet::new(vec![Record::new().with("total", Value::Integer(1))]);
        assert!(sub_entity_groups(&rows).is_empty());
    }
}
