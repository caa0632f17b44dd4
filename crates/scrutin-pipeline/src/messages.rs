//! Fixed user-facing answers for the terminal states that skip composition.

pub const OUT_OF_SCOPE: &str = "Désolé, je ne peux pas répondre à cette question car elle ne concerne pas \
les élections législatives ivoiriennes ou dépasse les données disponibles dans notre base.

Je peux uniquement fournir des informations sur :
- Les résultats par région ou circonscription ivoirienne
- Les candidats élus en Côte d'Ivoire
- Les taux de participation dans les régions ivoiriennes
- Les statistiques par parti politique ivoirien (RHDP, PDCI, PPA-CI, etc.)
- Les bulletins blancs et nuls";

pub const POLICY_VIOLATION: &str = "Désolé, je ne peux pas répondre à cette question car elle contient \
des demandes qui violent la politique d'utilisation de l'agent.

Je suis limité à l'analyse des données électorales législatives ivoiriennes :
- Aucune modification de données
- Pas de réponses à des demandes malveillantes ou non éthiques
- Pas d'informations sur le financement des campagnes
- Pas de données personnelles sur les électeurs";

pub const GENERATION_FAILED: &str =
    "Je n'ai pas réussi à générer une requête valide après plusieurs essais.";

pub const EXECUTION_FAILED: &str = "Désolé, je n'ai pas pu exécuter votre requête. \
Veuillez reformuler votre question s'il vous plaît.";

pub const NO_RESULTS: &str = "Aucun résultat trouvé pour cette recherche.";

pub const COMPOSITION_FAILED: &str = "Désolé, une erreur est survenue lors de la mise en forme des résultats.";

pub const CLARIFICATION_FALLBACK: &str = "Pourriez-vous préciser votre question ? Indiquez par exemple \
la circonscription (commune ou sous-préfecture), la région ou le parti qui vous intéresse.";
