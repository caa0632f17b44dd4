/// scrutin version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Recorded errors after which the generation/verification loop gives up.
pub const MAX_RECORDED_ERRORS: usize = 3;

/// Schema objects a generated query may reference.
pub const ALLOWED_OBJECTS: [&str; 5] = [
    "circonscriptions",
    "candidats",
    "vue_resultats_detailles",
    "vue_elus_uniquement",
    "vue_stats_regionales",
];

/// Statement keywords that are never allowed in a candidate query.
pub const FORBIDDEN_STATEMENTS: [&str; 10] = [
    "DROP", "DELETE", "INSERT", "UPDATE", "ALTER", "TRUNCATE", "GRANT", "REVOKE", "PRAGMA",
    "VACUUM",
];

/// Words that may follow FROM/JOIN without naming a schema object.
pub const NON_OBJECT_KEYWORDS: [&str; 5] = ["SELECT", "WHERE", "VALUES", "UNNEST", "LATERAL"];

/// MIME type of charts produced by the built-in renderer.
pub const SVG_MIME_TYPE: &str = "image/svg+xml";
