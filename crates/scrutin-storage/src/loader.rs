//! Out-of-band loader: replaces the database content with extracted records.
//!
//! This is the only code path that opens a writable connection. The
//! question-answering pipeline never calls it.

use std::path::Path;

use rusqlite::{named_params, Connection};
use serde::{Deserialize, Serialize};
use tracing::info;

use scrutin_core::errors::StorageError;
use scrutin_core::text::normalize;

use crate::pool::pragmas::apply_write_pragmas;
use crate::schema;
use crate::to_storage_err;

/// Region label used when the source document leaves it blank.
pub const UNKNOWN_REGION: &str = "NON_TRANSMIS";

/// One constituency with its turnout figures and candidate lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstituencyRecord {
    #[serde(default)]
    pub region_nom: String,
    #[serde(default)]
    pub code_circonscription: Option<String>,
    pub nom_circonscription: String,
    #[serde(default, alias = "nb_bureaux_vote")]
    pub nb_bureau: i64,
    #[serde(default)]
    pub inscrits: i64,
    #[serde(default)]
    pub votants: i64,
    #[serde(default)]
    pub taux_participation: f64,
    #[serde(default)]
    pub bulletins_nuls: i64,
    #[serde(default)]
    pub suffrages_exprimes: i64,
    #[serde(default)]
    pub bulletins_blancs_nombre: i64,
    #[serde(default)]
    pub bulletins_blancs_pourcentage: f64,
    #[serde(default)]
    pub candidats: Vec<CandidateRecord>,
}

/// One candidate list within a constituency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub nom_liste_candidat: String,
    #[serde(default)]
    pub parti_politique: Option<String>,
    #[serde(default)]
    pub score_voix: i64,
    #[serde(default)]
    pub pourcentage_voix: f64,
    #[serde(default)]
    pub est_elu: bool,
}

/// Row counts written by a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub constituencies: usize,
    pub candidates: usize,
}

/// Parse the loader's JSON input.
pub fn parse_records(json: &str) -> Result<Vec<ConstituencyRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Drop and recreate the schema at `path`, then insert every record and
/// create the views, all in one transaction.
pub fn load_results(
    path: &Path,
    records: &[ConstituencyRecord],
) -> Result<LoadSummary, StorageError> {
    let mut conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
    apply_write_pragmas(&conn)?;

    let tx = conn
        .transaction()
        .map_err(|e| to_storage_err(e.to_string()))?;
    schema::reset_tables(&tx)?;

    let mut summary = LoadSummary::default();
    {
        let mut insert_constituency = tx
            .prepare(
                "INSERT INTO circonscriptions
                    (region_nom, region_nom_norm, code_circonscription,
                     nom_circonscription, nom_circonscription_norm,
                     nb_bureau, inscrits, votants, taux_participation,
                     bulletins_nuls, suffrages_exprimes,
                     bulletins_blancs_nombre, bulletins_blancs_pourcentage)
                 VALUES (:region_nom, :region_nom_norm, :code_circonscription,
                         :nom_circonscription, :nom_circonscription_norm,
                         :nb_bureau, :inscrits, :votants, :taux_participation,
                         :bulletins_nuls, :suffrages_exprimes,
                         :bulletins_blancs_nombre, :bulletins_blancs_pourcentage)",
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
        let mut insert_candidate = tx
            .prepare(
                "INSERT INTO candidats
                    (circonscription_id, nom_liste_candidat, nom_liste_candidat_norm,
                     parti_politique, parti_politique_norm,
                     score_voix, pourcentage_voix, est_elu)
                 VALUES (:circonscription_id, :nom_liste_candidat, :nom_liste_candidat_norm,
                         :parti_politique, :parti_politique_norm,
                         :score_voix, :pourcentage_voix, :est_elu)",
            )
            .map_err(|e| to_storage_err(e.to_string()))?;

        for record in records {
            let region = if record.region_nom.trim().is_empty() {
                UNKNOWN_REGION
            } else {
                record.region_nom.trim()
            };
            let circonscription_id = insert_constituency
                .insert(named_params! {
                    ":region_nom": region,
                    ":region_nom_norm": normalize(region),
                    ":code_circonscription": record.code_circonscription,
                    ":nom_circonscription": record.nom_circonscription,
                    ":nom_circonscription_norm": normalize(&record.nom_circonscription),
                    ":nb_bureau": record.nb_bureau,
                    ":inscrits": record.inscrits,
                    ":votants": record.votants,
                    ":taux_participation": record.taux_participation,
                    ":bulletins_nuls": record.bulletins_nuls,
                    ":suffrages_exprimes": record.suffrages_exprimes,
                    ":bulletins_blancs_nombre": record.bulletins_blancs_nombre,
                    ":bulletins_blancs_pourcentage": record.bulletins_blancs_pourcentage,
                })
                .map_err(|e| to_storage_err(e.to_string()))?;
            summary.constituencies += 1;

            for candidate in &record.candidats {
                insert_candidate
                    .execute(named_params! {
                        ":circonscription_id": circonscription_id,
                        ":nom_liste_candidat": candidate.nom_liste_candidat,
                        ":nom_liste_candidat_norm": normalize(&candidate.nom_liste_candidat),
                        ":parti_politique": candidate.parti_politique,
                        ":parti_politique_norm": candidate.parti_politique.as_deref().map(normalize).unwrap_or_default(),
                        ":score_voix": candidate.score_voix,
                        ":pourcentage_voix": candidate.pourcentage_voix,
                        ":est_elu": candidate.est_elu as i64,
                    })
                    .map_err(|e| to_storage_err(e.to_string()))?;
                summary.candidates += 1;
            }
        }
    }

    schema::create_views(&tx)?;
    tx.commit().map_err(|e| to_storage_err(e.to_string()))?;

    info!(
        constituencies = summary.constituencies,
        candidates = summary.candidates,
        path = %path.display(),
        "election results loaded"
    );
    Ok(summary)
}
