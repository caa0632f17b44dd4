//! Tables and analytic views of the election database.
//!
//! Object names here must stay in sync with
//! `scrutin_core::constants::ALLOWED_OBJECTS`.

use rusqlite::Connection;

use scrutin_core::errors::StorageError;

use crate::to_storage_err;

pub const CREATE_TABLES: &str = "
CREATE TABLE circonscriptions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    region_nom TEXT NOT NULL,
    code_circonscription TEXT,
    nom_circonscription TEXT NOT NULL,
    region_nom_norm TEXT,
    nom_circonscription_norm TEXT,
    nb_bureau INTEGER DEFAULT 0,
    inscrits INTEGER DEFAULT 0,
    votants INTEGER DEFAULT 0,
    taux_participation REAL DEFAULT 0.0,
    bulletins_nuls INTEGER DEFAULT 0,
    suffrages_exprimes INTEGER DEFAULT 0,
    bulletins_blancs_nombre INTEGER DEFAULT 0,
    bulletins_blancs_pourcentage REAL DEFAULT 0.0
);
CREATE INDEX idx_circonscriptions_region ON circonscriptions(region_nom);
CREATE INDEX idx_circonscriptions_region_norm ON circonscriptions(region_nom_norm);
CREATE INDEX idx_circonscriptions_nom_norm ON circonscriptions(nom_circonscription_norm);

CREATE TABLE candidats (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    circonscription_id INTEGER NOT NULL REFERENCES circonscriptions(id),
    nom_liste_candidat TEXT NOT NULL,
    parti_politique TEXT,
    nom_liste_candidat_norm TEXT,
    parti_politique_norm TEXT,
    score_voix INTEGER DEFAULT 0,
    pourcentage_voix REAL DEFAULT 0.0,
    est_elu INTEGER DEFAULT 0
);
CREATE INDEX idx_candidats_parti ON candidats(parti_politique);
CREATE INDEX idx_candidats_parti_norm ON candidats(parti_politique_norm);
";

/// Every candidate joined with its constituency.
pub const VIEW_RESULTATS_DETAILLES: &str = "
CREATE VIEW IF NOT EXISTS vue_resultats_detailles AS
SELECT
    ci.region_nom,
    ci.region_nom_norm,
    ci.nom_circonscription,
    ci.nom_circonscription_norm,
    ci.taux_participation,
    c.parti_politique,
    c.parti_politique_norm,
    c.nom_liste_candidat,
    c.nom_liste_candidat_norm,
    c.score_voix,
    c.pourcentage_voix,
    c.est_elu
FROM candidats c
JOIN circonscriptions ci ON c.circonscription_id = ci.id;
";

/// Winners only.
pub const VIEW_ELUS_UNIQUEMENT: &str = "
CREATE VIEW IF NOT EXISTS vue_elus_uniquement AS
SELECT
    region_nom,
    region_nom_norm,
    nom_circonscription,
    nom_circonscription_norm,
    parti_politique,
    parti_politique_norm,
    nom_liste_candidat,
    nom_liste_candidat_norm,
    score_voix
FROM vue_resultats_detailles
WHERE est_elu = 1;
";

/// Per-region turnout aggregates.
pub const VIEW_STATS_REGIONALES: &str = "
CREATE VIEW IF NOT EXISTS vue_stats_regionales AS
SELECT
    region_nom,
    region_nom_norm,
    SUM(inscrits) AS total_inscrits,
    SUM(votants) AS total_votants,
    SUM(suffrages_exprimes) AS total_exprimes,
    ROUND((CAST(SUM(votants) AS REAL) / NULLIF(SUM(inscrits), 0)) * 100, 2) AS taux_participation_regional
FROM circonscriptions
GROUP BY region_nom, region_nom_norm;
";

/// Views in dependency order.
pub const VIEWS: [&str; 3] = [
    VIEW_RESULTATS_DETAILLES,
    VIEW_ELUS_UNIQUEMENT,
    VIEW_STATS_REGIONALES,
];

const DROP_ALL: &str = "
DROP VIEW IF EXISTS vue_stats_regionales;
DROP VIEW IF EXISTS vue_elus_uniquement;
DROP VIEW IF EXISTS vue_resultats_detailles;
DROP TABLE IF EXISTS candidats;
DROP TABLE IF EXISTS circonscriptions;
";

/// Drop every object, then recreate the tables. Views are created by
/// [`create_views`] once data is in place.
pub fn reset_tables(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(DROP_ALL)
        .map_err(|e| to_storage_err(e.to_string()))?;
    conn.execute_batch(CREATE_TABLES)
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn create_views(conn: &Connection) -> Result<(), StorageError> {
    for view in VIEWS {
        conn.execute_batch(view)
            .map_err(|e| to_storage_err(e.to_string()))?;
    }
    Ok(())
}
