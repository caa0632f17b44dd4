//! Loader and read-only store against a temp-file database.

use std::path::Path;

use scrutin_core::errors::StorageError;
use scrutin_core::models::Value;
use scrutin_core::traits::IQueryStore;
use scrutin_storage::loader::{parse_records, UNKNOWN_REGION};
use scrutin_storage::pool::pragmas::verify_query_only;
use scrutin_storage::{load_results, CandidateRecord, ConstituencyRecord, QueryStore};

fn candidate(name: &str, party: &str, votes: i64, elected: bool) -> CandidateRecord {
    CandidateRecord {
        nom_liste_candidat: name.to_string(),
        parti_politique: Some(party.to_string()),
        score_voix: votes,
        pourcentage_voix: 0.0,
        est_elu: elected,
    }
}

fn constituency(region: &str, name: &str, inscrits: i64, votants: i64, candidats: Vec<CandidateRecord>) -> ConstituencyRecord {
    ConstituencyRecord {
        region_nom: region.to_string(),
        code_circonscription: None,
        nom_circonscription: name.to_string(),
        nb_bureau: 10,
        inscrits,
        votants,
        taux_participation: 0.0,
        bulletins_nuls: 5,
        suffrages_exprimes: votants - 5,
        bulletins_blancs_nombre: 1,
        bulletins_blancs_pourcentage: 0.0,
        candidats,
    }
}

fn records() -> Vec<ConstituencyRecord> {
    vec![
        constituency(
            "GBÊKÊ",
            "BOUAKÉ COMMUNE",
            1000,
            400,
            vec![
                candidate("KOUASSI ÉRIC", "RHDP", 250, true),
                candidate("YAO MARC", "PDCI-RDA", 140, false),
            ],
        ),
        constituency(
            "AGNEBY-TIASSA",
            "AGBOVILLE COMMUNE",
            800,
            400,
            vec![candidate("N'GUESSAN ANNE", "RHDP", 300, true)],
        ),
        constituency(
            "",
            "AGBOVILLE SOUS-PREFECTURE",
            200,
            100,
            vec![candidate("KONAN PAUL", "INDEPENDANT", 90, true)],
        ),
    ]
}

fn seeded(dir: &Path) -> QueryStore {
    let db = dir.join("elections.db");
    load_results(&db, &records()).unwrap();
    QueryStore::open_path(&db, 2, 1000).unwrap()
}

#[test]
fn loader_reports_counts_and_fills_norm_columns() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("elections.db");
    let summary = load_results(&db, &records()).unwrap();
    assert_eq!(summary.constituencies, 3);
    assert_eq!(summary.candidates, 4);

    let store = QueryStore::open_path(&db, 1, 1000).unwrap();
    let rows = store
        .query("SELECT region_nom_norm, nom_circonscription_norm FROM circonscriptions ORDER BY id")
        .unwrap();
    assert_eq!(rows.records()[0].get("region_nom_norm"), Some(&Value::Text("gbeke".into())));
    assert_eq!(
        rows.records()[0].get("nom_circonscription_norm"),
        Some(&Value::Text("bouake commune".into()))
    );
}

#[test]
fn blank_region_is_marked_not_transmitted() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded(dir.path());
    let rows = store
        .query("SELECT region_nom FROM circonscriptions WHERE nom_circonscription = 'AGBOVILLE SOUS-PREFECTURE'")
        .unwrap();
    assert_eq!(rows.records()[0].get("region_nom"), Some(&Value::Text(UNKNOWN_REGION.into())));
}

#[test]
fn reload_replaces_previous_content() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("elections.db");
    load_results(&db, &records()).unwrap();
    load_results(&db, &records()[..1]).unwrap();
    let store = QueryStore::open_path(&db, 1, 1000).unwrap();
    let rows = store.query("SELECT COUNT(*) AS n FROM candidats").unwrap();
    assert_eq!(rows.records()[0].get("n"), Some(&Value::Integer(2)));
}

#[test]
fn views_expose_winners_and_regional_stats() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded(dir.path());

    let elus = store
        .query("SELECT nom_liste_candidat FROM vue_elus_uniquement ORDER BY score_voix DESC")
        .unwrap();
    assert_eq!(elus.len(), 3);
    assert_eq!(elus.columns(), vec!["nom_liste_candidat"]);

    let stats = store
        .query("SELECT taux_participation_regional FROM vue_stats_regionales WHERE region_nom_norm = 'gbeke'")
        .unwrap();
    assert_eq!(stats.records()[0].get("taux_participation_regional"), Some(&Value::Real(40.0)));
}

#[test]
fn columns_keep_select_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded(dir.path());
    let rows = store
        .query("SELECT score_voix, nom_circonscription FROM vue_resultats_detailles LIMIT 1")
        .unwrap();
    assert_eq!(rows.columns(), vec!["score_voix", "nom_circonscription"]);
}

#[test]
fn repeated_execution_is_identical() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded(dir.path());
    let sql = "SELECT parti_politique, COUNT(*) AS sieges FROM vue_elus_uniquement GROUP BY parti_politique ORDER BY parti_politique";
    assert_eq!(store.query(sql).unwrap(), store.query(sql).unwrap());
}

#[test]
fn plan_validation_reports_syntax_errors() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded(dir.path());
    assert!(store.validate_plan("SELECT * FROM candidats").is_ok());
    let err = store.validate_plan("SELEC * FROM candidats").unwrap_err();
    assert!(matches!(err, StorageError::SqliteError { .. }));
    assert!(store.validate_plan("SELECT nope FROM candidats").is_err());
}

#[test]
fn writes_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded(dir.path());
    assert!(store.query("DELETE FROM candidats").is_err());
    let rows = store.query("SELECT COUNT(*) AS n FROM candidats").unwrap();
    assert_eq!(rows.records()[0].get("n"), Some(&Value::Integer(4)));
}

#[test]
fn readers_run_query_only() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded(dir.path());
    assert!(store.pool().with_conn(verify_query_only).unwrap());
}

#[test]
fn missing_database_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = QueryStore::open_path(&dir.path().join("absent.db"), 1, 1000)
        .err()
        .unwrap();
    assert!(matches!(err, StorageError::DatabaseNotFound { .. }));
}

#[test]
fn parses_extractor_field_names() {
    let json = r#"[{
        "region_nom": "PORO",
        "nom_circonscription": "KORHOGO COMMUNE",
        "nb_bureaux_vote": 12,
        "candidats": [{"nom_liste_candidat": "X", "est_elu": true}]
    }]"#;
    let parsed = parse_records(json).unwrap();
    assert_eq!(parsed[0].nb_bureau, 12);
    assert!(parsed[0].candidats[0].est_elu);
    assert_eq!(parsed[0].candidats[0].parti_politique, None);
}
