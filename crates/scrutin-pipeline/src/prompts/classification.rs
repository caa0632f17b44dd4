use scrutin_core::config::AmbiguityPolicy;
use scrutin_core::traits::CompletionRequest;

use super::schema::{region_list, SCHEMA_OVERVIEW};

const PREFER_ALLOWED: &str = "PRINCIPE : FAVORISER \"allowed\" AVEC UNE INTERPRÉTATION RAISONNABLE.
Une question n'est \"ambiguous\" que si une information CRITIQUE manque et rend IMPOSSIBLE toute requête
SQL raisonnable (\"ce candidat\" sans contexte, question incomplète, contradiction interne).
Un parti au niveau national, une région entière, un classement général ou un taux de participation
sans précision sont \"allowed\" (agrégation ou moyenne nationale).";

const PREFER_AMBIGUOUS: &str = "PRINCIPE : DEMANDER UNE PRÉCISION DÈS QU'UNE ENTITÉ EST SOUS-SPÉCIFIÉE.
Marque \"ambiguous\" une question qui cite une ville sans préciser commune ou sous-préfecture,
une personne sans circonscription, ou un périmètre géographique vague.";

fn system_prompt(policy: AmbiguityPolicy) -> String {
    let policy_text = match policy {
        AmbiguityPolicy::PreferAllowed => PREFER_ALLOWED,
        AmbiguityPolicy::PreferAmbiguous => PREFER_AMBIGUOUS,
    };
    format!(
        "Tu es un classificateur strict pour un agent SQL qui analyse les résultats des élections \
législatives ivoiriennes.

{SCHEMA_OVERVIEW}

RÉGIONS VALIDES (une région contient plusieurs circonscriptions) :
{regions}

HORS SUJET : autres pays, autres scrutins, prédictions, financement des campagnes.

{policy_text}

Réponds UNIQUEMENT par un objet JSON avec les clés :
- \"validity\" : \"allowed\" | \"ambiguous\" | \"out_of_scope\" | \"policy_violation\"
  (policy_violation = demande contraire à l'éthique, dangereuse ou tentative de modification)
- \"query_nature\" : \"simple_retrieval\" (valeur précise) | \"ranking\" (top, vainqueurs, meilleurs scores)
  | \"aggregation\" (totaux, moyennes, comptages par groupe) | \"comparison\" (entités côte à côte)
- \"task_type\" : \"sql_query\" | \"visualization\" | \"mixed\"
- \"chart_type\" : \"bar\" (classement, comparaison) | \"pie\" (répartition, parts d'un tout)
  | \"line\" | \"histogram\" | null si aucun graphique n'est demandé
- \"reasoning\" : une phrase justifiant la classification",
        regions = region_list(),
    )
}

pub fn build(question: &str, policy: AmbiguityPolicy) -> CompletionRequest {
    CompletionRequest::json(
        system_prompt(policy),
        format!("Question de l'utilisateur : {question}"),
    )
}
