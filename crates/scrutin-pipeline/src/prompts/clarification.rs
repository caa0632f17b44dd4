use scrutin_core::traits::CompletionRequest;

use super::schema::{region_list, SCHEMA_OVERVIEW};

pub fn build(question: &str, reasoning: &str) -> CompletionRequest {
    let system = format!(
        "Tu es un assistant électoral pour les élections législatives ivoiriennes. \
L'utilisateur a posé une question incomplète, ambiguë ou trop large.

CONNAISSANCE DISPONIBLE :
{SCHEMA_OVERVIEW}

RÉGIONS : {regions} (on dit généralement \"Abidjan\" pour le district autonome d'Abidjan).

TÂCHE : rédige une réponse courte et polie, en français, qui :
1. reformule ce que l'utilisateur cherche ;
2. explique précisément ce qui manque (par exemple commune ou sous-préfecture pour une ville qui a les deux) ;
3. lui pose une question directe pour préciser.
Ne sois pas robotique, n'ajoute pas de note, donne uniquement la réponse.",
        regions = region_list(),
    );
    let reasoning = if reasoning.trim().is_empty() {
        "La requête est incomplète."
    } else {
        reasoning
    };
    let user = format!("QUESTION DE L'UTILISATEUR : \"{question}\"\nRAISON DU BLOCAGE : {reasoning}");
    CompletionRequest::text(system, user)
}
