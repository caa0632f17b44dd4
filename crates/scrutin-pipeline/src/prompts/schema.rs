//! Natural-language description of the database, shared by several prompts.

/// Normalized names of the regions that contain constituencies.
pub const REGIONS: &[&str] = &[
    "agneby-tiassa",
    "bafing",
    "belier",
    "bere",
    "bounkani",
    "cavally",
    "district autonome d'abidjan",
    "district autonome de yamoussoukro",
    "folon",
    "gbeke",
    "gbokle",
    "goh",
    "gontougo",
    "grands ponts",
    "guemon",
    "hambol",
    "haut-sassandra",
    "iffou",
    "indenie-djuablin",
    "kabadougou",
    "la me",
    "loh-djiboua",
    "marahoue",
    "moronou",
    "nawa",
    "n'zi",
    "poro",
    "san-pedro",
    "sud-comoe",
    "tonkpi",
    "worodougou",
];

pub const SCHEMA_OVERVIEW: &str = "SCHÉMA DE LA BASE DES ÉLECTIONS LÉGISLATIVES IVOIRIENNES :

TABLES :
1. circonscriptions : id, region_nom, region_nom_norm, code_circonscription, nom_circonscription,
   nom_circonscription_norm, nb_bureau, inscrits, votants, taux_participation, bulletins_nuls,
   suffrages_exprimes, bulletins_blancs_nombre, bulletins_blancs_pourcentage
2. candidats : id, circonscription_id (-> circonscriptions.id), nom_liste_candidat,
   nom_liste_candidat_norm, parti_politique, parti_politique_norm, score_voix, pourcentage_voix,
   est_elu (0/1)

VUES :
- vue_resultats_detailles : jointure complète candidats + circonscriptions
- vue_elus_uniquement : candidats élus seulement
- vue_stats_regionales : agrégations de participation par région";

/// Column-level definitions with SQLite types, for the query generator.
pub const VIEW_COLUMNS: &str = "1. VUE 'vue_resultats_detailles' (tous les scores par candidat) :
   - region_nom (TEXT), region_nom_norm (TEXT, minuscule sans accent) <- FILTRE ICI
   - nom_circonscription (TEXT), nom_circonscription_norm (TEXT) <- FILTRE ICI
   - taux_participation (REAL)
   - parti_politique (TEXT), parti_politique_norm (TEXT)
   - nom_liste_candidat (TEXT), nom_liste_candidat_norm (TEXT)
   - score_voix (INTEGER), pourcentage_voix (REAL)
   - est_elu (INTEGER) : 1 pour élu, 0 sinon

2. VUE 'vue_elus_uniquement' (vainqueurs uniquement) :
   - region_nom, region_nom_norm, nom_circonscription, nom_circonscription_norm (TEXT)
   - parti_politique, parti_politique_norm, nom_liste_candidat, nom_liste_candidat_norm (TEXT)
   - score_voix (INTEGER)

3. VUE 'vue_stats_regionales' (agrégations de participation) :
   - region_nom (TEXT), region_nom_norm (TEXT)
   - total_inscrits, total_votants, total_exprimes (INTEGER)
   - taux_participation_regional (REAL, en %)

4. TABLE 'circonscriptions' pour nb_bureau, bulletins_nuls, bulletins_blancs_nombre,
   bulletins_blancs_pourcentage, inscrits, votants, taux_participation par circonscription.";

/// Region list rendered as a quoted, comma-separated line.
pub fn region_list() -> String {
    REGIONS
        .iter()
        .map(|r| format!("\"{r}\""))
        .collect::<Vec<_>>()
        .join(", ")
}
