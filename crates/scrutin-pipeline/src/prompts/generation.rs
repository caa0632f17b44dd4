use std::fmt::Write as _;

use scrutin_core::models::{QueryNature, RetrievalContext};
use scrutin_core::traits::CompletionRequest;

use super::schema::VIEW_COLUMNS;

/// Everything the generator prompt is built from.
#[derive(Debug, Clone, Copy)]
pub struct GenerationInput<'a> {
    pub question: &'a str,
    pub normalized_question: &'a str,
    pub query_nature: QueryNature,
    /// Display string of the most recent error-log entry.
    pub last_error: Option<&'a str>,
    pub retrieval: &'a RetrievalContext,
    pub row_limit: usize,
}

pub fn build(input: &GenerationInput<'_>) -> CompletionRequest {
    let mut system = format!(
        "TU ES UN EXPERT SQLITE. Génère une requête SQL brute (une seule instruction SELECT) \
basée strictement sur le schéma et les types ci-dessous.

--- SCHÉMA DÉTAILLÉ (TYPES SQLITE) ---
{VIEW_COLUMNS}

--- CONSIGNES DE SYNTAXE ---
- TEXT : guillemets simples et LIKE avec % sur les colonnes suffixées par _norm \
(ex : region_nom_norm LIKE '%abidjan%'). N'utilise jamais '=' pour un lieu ou une personne.
- INTEGER/REAL : pas de guillemets (ex : score_voix > 1000, est_elu = 1).
- LIMIT : ajoute 'LIMIT {limit}' par défaut.
- SQL PUR : pas de texte explicatif, pas de bloc Markdown.
- Valeurs de recherche en minuscules, sans accent ni point (\"R.H.D.P.\" -> \"rhdp\"), tirets conservés (\"ppa-ci\").

--- COMMUNE / SOUS-PRÉFECTURE ---
Beaucoup de villes ont deux circonscriptions : une 'COMMUNE' et une 'SOUS-PREFECTURE'.
1. Ville sans précision : cherche les deux (nom_circonscription_norm LIKE '%agboville%') \
et sélectionne TOUJOURS la colonne nom_circonscription.
2. \"ville\", \"commune\", \"cne\" : LIKE '%agboville%commune%'.
3. \"S/P\", \"SP\", \"village\", \"sous-préfecture\" : LIKE '%agboville%prefecture%'.
",
        limit = input.row_limit,
    );

    if let Some(error) = input.last_error {
        let _ = write!(system, "\nERREUR PRÉCÉDENTE À CORRIGER : {error}\n");
    }

    let _ = write!(
        system,
        "\nCONTEXTE DE RÉFÉRENCE :\n{}",
        input.retrieval.render()
    );

    let user = format!(
        "QUESTION UTILISATEUR : \"{}\"\nVALEUR DE RECHERCHE NETTOYÉE : \"{}\"\nTYPE DE REQUÊTE : {}\n\nRequête SQLite :",
        input.question,
        input.normalized_question,
        input.query_nature.as_str(),
    );

    CompletionRequest::text(system, user)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input<'a>(last_error: Option<&'a str>, retrieval: &'a RetrievalContext) -> GenerationInput<'a> {
        GenerationInput {
            question: "Qui a gagné à Bouaké ?",
            normalized_question: "qui a gagne a bouake ?",
            query_nature: QueryNature::Ranking,
            last_error,
            retrieval,
            row_limit: 10,
        }
    }

    #[test]
    fn includes_feedback_and_context() {
        let ctx = RetrievalContext::NoKeywords;
        let req = build(&input(Some("schema hallucination: object 'users' does not exist"), &ctx));
        assert!(req.system.contains("ERREUR PRÉCÉDENTE À CORRIGER : schema hallucination"));
        assert!(req.system.contains("Aucun mot-clé pertinent détecté."));
        assert!(req.system.contains("LIMIT 10"));
        assert!(req.user.contains("qui a gagne a bouake"));
        assert!(req.user.contains("ranking"));
    }

    #[test]
    fn no_feedback_on_first_attempt() {
        let ctx = RetrievalContext::NoRelevantExamples;
        let req = build(&input(None, &ctx));
        assert!(!req.system.contains("ERREUR PRÉCÉDENTE"));
    }
}
