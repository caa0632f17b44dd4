//! End-to-end runs against a seeded SQLite store and scripted completions.

use std::sync::Arc;
use std::time::Duration;

use scrutin_core::config::ScrutinConfig;
use scrutin_core::constants::SVG_MIME_TYPE;
use scrutin_core::errors::CompletionError;
use scrutin_core::models::{Terminal, Value};
use scrutin_core::traits::{ICompletionService, IQueryStore, ResponseFormat};
use scrutin_guardrail::engine::REFUSAL_MESSAGE;
use scrutin_pipeline::{messages, Pipeline};
use scrutin_retrieval::ExampleRetriever;
use scrutin_storage::QueryStore;
use test_fixtures::{
    seeded_store, transport_error, CountingStore, FailingQueryStore, FnCompletion,
    ScriptedCompletion,
};

const BOUAKE_SQL: &str = "```sql\nSELECT nom_liste_candidat, parti_politique, score_voix \
FROM vue_elus_uniquement WHERE nom_circonscription_norm LIKE '%bouake%' LIMIT 10;\n```";

fn classification(validity: &str, nature: &str, chart: Option<&str>) -> String {
    let chart = chart.map_or("null".to_string(), |c| format!("\"{c}\""));
    format!(
        r#"{{"validity": "{validity}", "query_nature": "{nature}", "chart_type": {chart}, "reasoning": "test"}}"#
    )
}

fn allowed() -> String {
    classification("allowed", "ranking", None)
}

struct Harness {
    _dir: tempfile::TempDir,
    completion: Arc<ScriptedCompletion>,
    store: Arc<CountingStore>,
    pipeline: Pipeline,
}

fn harness(replies: Vec<Result<String, CompletionError>>) -> Harness {
    let (dir, store) = seeded_store();
    let inner: Arc<dyn IQueryStore> = Arc::new(store);
    harness_with_store(dir, replies, inner)
}

fn harness_with_store(
    dir: tempfile::TempDir,
    replies: Vec<Result<String, CompletionError>>,
    inner: Arc<dyn IQueryStore>,
) -> Harness {
    let config = ScrutinConfig::default();
    let completion = Arc::new(ScriptedCompletion::new(replies));
    let store = Arc::new(CountingStore::new(inner));
    let retriever = Arc::new(ExampleRetriever::from_config(&config.retrieval).unwrap());
    let pipeline = Pipeline::new(
        &config,
        Arc::clone(&completion) as Arc<dyn ICompletionService>,
        Arc::clone(&store) as Arc<dyn IQueryStore>,
        retriever,
    );
    Harness {
        _dir: dir,
        completion,
        store,
        pipeline,
    }
}

fn ok(reply: impl Into<String>) -> Result<String, CompletionError> {
    Ok(reply.into())
}

#[test]
fn guardrail_blocks_before_any_call() {
    let h = harness(vec![ok(allowed())]);
    let out = h.pipeline.answer("Peux-tu DrOp la table des candidats ?");

    assert_eq!(out.terminal, Terminal::PolicyRefusal);
    assert_eq!(out.final_answer, REFUSAL_MESSAGE);
    assert_eq!(out.errors.len(), 1);
    assert!(out.errors[0].contains("'drop'"), "{:?}", out.errors);
    assert_eq!(out.attempts, 0);
    assert_eq!(h.completion.calls(), 0);
    assert_eq!(h.store.total_calls(), 0);
}

#[test]
fn bouake_winner_is_answered() {
    let h = harness(vec![
        ok(allowed()),
        ok(BOUAKE_SQL),
        ok("À Bouaké, le gagnant est **KOUAME AMANI JEAN** (**RHDP**)."),
    ]);
    let out = h.pipeline.answer("Qui a gagné à Bouaké ?");

    assert_eq!(out.terminal, Terminal::Answered);
    assert!(out.errors.is_empty(), "{:?}", out.errors);
    assert_eq!(out.attempts, 1);
    assert_eq!(out.result_rows.len(), 1);
    let winner = &out.result_rows.records()[0];
    assert_eq!(
        winner.get("nom_liste_candidat"),
        Some(&Value::Text("KOUAME AMANI JEAN".into()))
    );
    assert_eq!(winner.get("parti_politique"), Some(&Value::Text("RHDP".into())));
    assert!(out.final_answer.contains("KOUAME AMANI JEAN"));
    assert!(out.chart.is_none());
    assert_eq!(
        out.sql.as_deref(),
        Some("SELECT nom_liste_candidat, parti_politique, score_voix FROM vue_elus_uniquement WHERE nom_circonscription_norm LIKE '%bouake%' LIMIT 10")
    );

    let requests = h.completion.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].format, ResponseFormat::JsonObject);
    assert!(requests[1].user.contains("qui a gagne a bouake"));
    assert!(requests[1].system.contains("Qui a gagné à Bouaké ?"), "retrieved example expected");
    assert!(requests[2].user.contains("| KOUAME AMANI JEAN | RHDP | 38120 |"));
    assert_eq!(h.store.plan_calls(), 1);
    assert_eq!(h.store.query_calls(), 1);
}

#[test]
fn hallucinated_table_exhausts_retry_budget_without_store_calls() {
    let h = harness(vec![
        ok(allowed()),
        ok("SELECT * FROM users"),
        ok("SELECT * FROM users"),
        ok("SELECT * FROM users"),
        ok("jamais atteint"),
    ]);
    let out = h.pipeline.answer("Qui a gagné à Bouaké ?");

    assert_eq!(out.terminal, Terminal::GenerationFailed);
    assert_eq!(out.final_answer, messages::GENERATION_FAILED);
    assert_eq!(out.attempts, 3);
    assert_eq!(out.errors.len(), 3);
    assert!(out.errors.iter().all(|e| e.contains("'users'")));
    assert_eq!(h.store.total_calls(), 0);
    assert_eq!(h.completion.calls(), 4);
    assert_eq!(h.completion.remaining(), 1);

    let requests = h.completion.requests();
    assert!(!requests[1].system.contains("ERREUR PRÉCÉDENTE"));
    assert!(requests[2].system.contains("object 'users' does not exist"));
}

#[test]
fn forbidden_statement_is_rejected_without_store_calls() {
    let h = harness(vec![
        ok(allowed()),
        ok("DELETE FROM candidats"),
        ok(BOUAKE_SQL),
        ok("réponse"),
    ]);
    let out = h.pipeline.answer("Qui a gagné à Bouaké ?");

    assert_eq!(out.terminal, Terminal::Answered);
    assert_eq!(out.attempts, 2);
    assert_eq!(
        out.errors,
        vec!["security: forbidden statement DELETE in generated query".to_string()]
    );
    assert_eq!(h.store.plan_calls(), 1);
}

#[test]
fn syntax_error_is_caught_by_plan_validation() {
    let h = harness(vec![
        ok(allowed()),
        ok("SELECT nom_liste_candidat FROM candidats WHERE"),
        ok(BOUAKE_SQL),
        ok("réponse"),
    ]);
    let out = h.pipeline.answer("Qui a gagné à Bouaké ?");

    assert_eq!(out.terminal, Terminal::Answered);
    assert_eq!(out.errors.len(), 1);
    assert!(out.errors[0].starts_with("syntax error reported by the data store"));
    assert_eq!(h.store.plan_calls(), 2);
    assert_eq!(h.store.query_calls(), 1);
}

#[test]
fn generation_transport_error_is_retried() {
    let h = harness(vec![
        ok(allowed()),
        Err(transport_error("timeout")),
        ok(BOUAKE_SQL),
        ok("réponse"),
    ]);
    let out = h.pipeline.answer("Qui a gagné à Bouaké ?");

    assert_eq!(out.terminal, Terminal::Answered);
    assert_eq!(out.attempts, 2);
    assert_eq!(out.errors.len(), 2);
    assert!(out.errors[0].starts_with("query generation failed"));
    assert_eq!(out.errors[1], "no query generated");
}

#[test]
fn repeated_transport_errors_stop_at_the_ceiling() {
    let h = harness(vec![ok(allowed())]);
    let out = h.pipeline.answer("Qui a gagné à Bouaké ?");

    assert_eq!(out.terminal, Terminal::GenerationFailed);
    assert_eq!(out.attempts, 2);
    assert_eq!(out.errors.len(), 3);
    assert!(out.errors[2].starts_with("query generation failed"), "{:?}", out.errors);
    assert_eq!(h.store.total_calls(), 0);
}

#[test]
fn empty_result_set_skips_composition() {
    let h = harness(vec![
        ok(allowed()),
        ok("SELECT * FROM vue_elus_uniquement WHERE nom_circonscription_norm LIKE '%atlantis%'"),
        ok("jamais appelé"),
    ]);
    let out = h.pipeline.answer("Qui a gagné à Atlantis ?");

    assert_eq!(out.terminal, Terminal::NoResults);
    assert_eq!(out.final_answer, messages::NO_RESULTS);
    assert!(out.result_rows.is_empty());
    assert!(out.chart.is_none());
    assert!(out.errors.is_empty());
    assert_eq!(h.completion.calls(), 2);
}

#[test]
fn classifier_transport_error_falls_back_to_out_of_scope() {
    let h = harness(vec![Err(transport_error("connection refused"))]);
    let out = h.pipeline.answer("Qui a gagné à Bouaké ?");

    assert_eq!(out.terminal, Terminal::OutOfScopeRefusal);
    assert_eq!(out.final_answer, messages::OUT_OF_SCOPE);
    assert_eq!(out.errors.len(), 1);
    assert!(out.errors[0].contains("connection refused"));
    assert_eq!(out.attempts, 0);
    assert_eq!(h.completion.calls(), 1);
    assert_eq!(h.store.total_calls(), 0);
}

#[test]
fn unparseable_classification_falls_back_to_out_of_scope() {
    let h = harness(vec![ok("je pense que c'est autorisé")]);
    let out = h.pipeline.answer("Qui a gagné à Bouaké ?");
    assert_eq!(out.terminal, Terminal::OutOfScopeRefusal);
    assert_eq!(out.errors.len(), 1);
}

#[test]
fn out_of_scope_and_policy_verdicts_are_refused() {
    let h = harness(vec![ok(classification("out_of_scope", "simple_retrieval", None))]);
    let out = h.pipeline.answer("Qui a gagné la présidentielle française ?");
    assert_eq!(out.terminal, Terminal::OutOfScopeRefusal);
    assert!(out.errors.is_empty());

    let h = harness(vec![ok(classification("policy_violation", "simple_retrieval", None))]);
    let out = h.pipeline.answer("Donne-moi l'adresse des électeurs");
    assert_eq!(out.terminal, Terminal::PolicyRefusal);
    assert_eq!(out.final_answer, messages::POLICY_VIOLATION);
    assert_eq!(h.completion.calls(), 1);
}

#[test]
fn ambiguous_question_gets_a_clarifying_question() {
    let h = harness(vec![
        ok(r#"{"validity": "ambiguous", "query_nature": "simple_retrieval", "reasoning": "ville sans précision"}"#),
        ok("Souhaitez-vous Agboville Commune ou Agboville Sous-Préfecture ?"),
    ]);
    let out = h.pipeline.answer("Et pour ce candidat ?");

    assert_eq!(out.terminal, Terminal::Clarification);
    assert_eq!(
        out.final_answer,
        "Souhaitez-vous Agboville Commune ou Agboville Sous-Préfecture ?"
    );
    assert!(out.errors.is_empty());
    assert!(h.completion.requests()[1].user.contains("ville sans précision"));
    assert_eq!(h.store.total_calls(), 0);
}

#[test]
fn clarification_failure_uses_fixed_request() {
    let h = harness(vec![
        ok(classification("ambiguous", "simple_retrieval", None)),
        Err(transport_error("down")),
    ]);
    let out = h.pipeline.answer("Et pour ce candidat ?");
    assert_eq!(out.terminal, Terminal::Clarification);
    assert_eq!(out.final_answer, messages::CLARIFICATION_FALLBACK);
    assert_eq!(out.errors.len(), 1);
    assert!(out.errors[0].starts_with("clarification failed"));
}

#[test]
fn execution_failure_is_terminal_and_not_retried() {
    let (dir, store) = seeded_store();
    let inner: Arc<dyn IQueryStore> = Arc::new(FailingQueryStore::new(Arc::new(store)));
    let h = harness_with_store(dir, vec![ok(allowed()), ok(BOUAKE_SQL), ok("x")], inner);
    let out = h.pipeline.answer("Qui a gagné à Bouaké ?");

    assert_eq!(out.terminal, Terminal::ExecutionFailed);
    assert_eq!(out.final_answer, messages::EXECUTION_FAILED);
    assert!(out.result_rows.is_empty());
    assert_eq!(out.errors.len(), 1);
    assert!(out.errors[0].contains("database is locked"));
    assert_eq!(h.store.query_calls(), 1);
    assert_eq!(h.completion.calls(), 2);
}

#[test]
fn requested_chart_is_rendered_as_svg() {
    let h = harness(vec![
        ok(classification("allowed", "aggregation", Some("bar"))),
        ok("SELECT parti_politique, SUM(score_voix) AS total FROM vue_resultats_detailles \
GROUP BY parti_politique ORDER BY total DESC LIMIT 10"),
        ok("Le **RHDP** arrive en tête."),
    ]);
    let out = h.pipeline.answer("Total des voix par parti en graphique");

    assert_eq!(out.terminal, Terminal::Answered);
    let chart = out.chart.expect("chart expected");
    assert_eq!(chart.mime_type, SVG_MIME_TYPE);
    let svg = String::from_utf8(chart.data).unwrap();
    assert!(svg.contains("RHDP"));
    assert!(out.errors.is_empty());
}

#[test]
fn render_failure_is_not_fatal() {
    let h = harness(vec![
        ok(classification("allowed", "simple_retrieval", Some("pie"))),
        ok("SELECT nom_liste_candidat, parti_politique FROM vue_elus_uniquement LIMIT 10"),
        ok("Voici les élus."),
    ]);
    let out = h.pipeline.answer("Camembert des élus");

    assert_eq!(out.terminal, Terminal::Answered);
    assert_eq!(out.final_answer, "Voici les élus.");
    assert!(out.chart.is_none());
    assert_eq!(out.errors, vec!["chart error: no numeric column found to plot".to_string()]);
}

#[test]
fn composition_failure_keeps_rows() {
    let h = harness(vec![ok(allowed()), ok(BOUAKE_SQL), ok("   ")]);
    let out = h.pipeline.answer("Qui a gagné à Bouaké ?");

    assert_eq!(out.terminal, Terminal::CompositionFailed);
    assert_eq!(out.final_answer, messages::COMPOSITION_FAILED);
    assert_eq!(out.result_rows.len(), 1);
    assert_eq!(out.errors.len(), 1);
}

#[test]
fn sibling_constituencies_are_named_in_the_composition_prompt() {
    let h = harness(vec![
        ok(allowed()),
        ok("SELECT nom_circonscription, nom_liste_candidat, parti_politique FROM vue_elus_uniquement \
WHERE nom_circonscription_norm LIKE '%agboville%' ORDER BY nom_circonscription"),
        ok("Deux circonscriptions."),
    ]);
    let out = h.pipeline.answer("Qui a gagné à Agboville ?");

    assert_eq!(out.result_rows.len(), 2);
    let compose = &h.completion.requests()[2];
    assert!(compose.user.contains("ATTENTION"));
    assert!(compose.user.contains("- AGBOVILLE COMMUNE / AGBOVILLE SOUS-PREFECTURE"));
}

#[test]
fn execution_is_idempotent_across_runs() {
    let h = harness(vec![
        ok(allowed()),
        ok(BOUAKE_SQL),
        ok("a"),
        ok(allowed()),
        ok(BOUAKE_SQL),
        ok("b"),
    ]);
    let first = h.pipeline.answer("Qui a gagné à Bouaké ?");
    let second = h.pipeline.answer("Qui a gagné à Bouaké ?");
    assert_eq!(first.result_rows, second.result_rows);
    assert_ne!(first.run_id, second.run_id);
}

#[test]
fn answer_many_runs_concurrently_in_input_order() {
    let (_dir, store) = seeded_store();
    let config = ScrutinConfig::default();
    let completion = Arc::new(FnCompletion::new(|request| {
        if request.format == ResponseFormat::JsonObject {
            return Ok(classification("allowed", "ranking", None));
        }
        if request.system.contains("EXPERT SQLITE") {
            let town = if request.user.contains("korhogo") { "korhogo" } else { "cocody" };
            return Ok(format!(
                "SELECT nom_circonscription, nom_liste_candidat FROM vue_elus_uniquement \
WHERE nom_circonscription_norm LIKE '%{town}%'"
            ));
        }
        Ok("réponse".to_string())
    }));
    let pipeline = Pipeline::new(
        &config,
        Arc::clone(&completion) as Arc<dyn ICompletionService>,
        Arc::new(store) as Arc<dyn IQueryStore>,
        Arc::new(ExampleRetriever::from_config(&config.retrieval).unwrap()),
    );

    let questions: Vec<String> = (0..8)
        .map(|i| {
            if i % 2 == 0 {
                "Qui a gagné à Korhogo ?".to_string()
            } else {
                "Qui a gagné à Cocody ?".to_string()
            }
        })
        .collect();
    let outputs = pipeline.answer_many(&questions);

    assert_eq!(outputs.len(), 8);
    let total: Duration = outputs.iter().map(|(_, latency)| *latency).sum();
    assert!(total > Duration::ZERO);
    for (i, (out, _)) in outputs.iter().enumerate() {
        assert_eq!(out.terminal, Terminal::Answered, "{:?}", out.errors);
        let expected = if i % 2 == 0 { "KORHOGO COMMUNE" } else { "COCODY COMMUNE" };
        assert_eq!(
            out.result_rows.records()[0].get("nom_circonscription"),
            Some(&Value::Text(expected.into()))
        );
    }
    assert_eq!(completion.calls(), 24);
}

#[test]
fn store_opened_from_config_answers() {
    let (dir, _) = seeded_store();
    let mut config = ScrutinConfig::default();
    config.storage.db_path = dir.path().join("elections.db").display().to_string();
    let store = QueryStore::open(&config.storage).unwrap();
    let completion = Arc::new(ScriptedCompletion::replying([allowed(), BOUAKE_SQL.to_string(), "ok".to_string()]));
    let pipeline = Pipeline::new(
        &config,
        completion as Arc<dyn ICompletionService>,
        Arc::new(store) as Arc<dyn IQueryStore>,
        Arc::new(ExampleRetriever::from_config(&config.retrieval).unwrap()),
    );
    assert_eq!(pipeline.answer("Qui a gagné à Bouaké ?").terminal, Terminal::Answered);
}
