/// Why a token is on the denylist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyCategory {
    /// French verbs asking to change the data.
    DataMutation,
    /// SQL statement keywords that destroy or alter data.
    DestructiveStatement,
    /// Attempts to reach credentials or break in.
    SecurityProbe,
    /// Shell or host commands.
    SystemCommand,
}

/// A denylisted token, always lower-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DenyToken {
    pub token: &'static str,
    pub category: DenyCategory,
}

macro_rules! deny {
    ($category:ident: $($token:literal),+ $(,)?) => {
        [$(DenyToken { token: $token, category: DenyCategory::$category }),+]
    };
}

// ── Data mutation (French) ─────────────────────────────────────────────────
const MUTATION: [DenyToken; 47] = deny!(DataMutation:
    "supprime", "supprimer", "supprimez", "supprimons", "supprimé", "supprimés",
    "supprime tout", "tout supprimer",
    "efface", "effacer", "effacez", "effaçons",
    "modifie", "modifier", "modifiez", "modifions", "modifie les données",
    "change", "changer", "changez", "changeons", "change les données",
    "insère", "insérer", "insérez", "insérons",
    "ajoute", "ajouter", "ajoutez", "ajoutons",
    "crée", "créer", "créez", "créons",
    "altère", "altérer",
    "vide la table",
    "accorde", "accorder",
    "révoque", "révoquer",
    "exécute", "exécuter", "exécutons",
    "remplace", "remplacer", "remplaçons",
);

// ── Destructive statements ─────────────────────────────────────────────────
const DESTRUCTIVE: [DenyToken; 11] = deny!(DestructiveStatement:
    "drop", "delete", "truncate", "update", "insert", "alter", "grant", "revoke",
    "dropper", "droppe", "deleter",
);

// ── Security probes ────────────────────────────────────────────────────────
const PROBES: [DenyToken; 10] = deny!(SecurityProbe:
    "pirate", "pirater", "hack", "hacker",
    "password", "mot de passe", "credentials",
    "accès admin", "administrateur", "injection sql",
);

// ── System commands ────────────────────────────────────────────────────────
const SYSTEM: [DenyToken; 3] = deny!(SystemCommand: "rm -rf", "shutdown", "restart");

/// Every denylisted token.
pub fn all_tokens() -> &'static [DenyToken] {
    static ALL: std::sync::LazyLock<Vec<DenyToken>> = std::sync::LazyLock::new(|| {
        MUTATION
            .iter()
            .chain(DESTRUCTIVE.iter())
            .chain(PROBES.iter())
            .chain(SYSTEM.iter())
            .copied()
            .collect()
    });
    &ALL
}
