pub mod denylist;

use regex::Regex;
use std::sync::LazyLock;

pub use denylist::{all_tokens, DenyCategory, DenyToken};

/// Single alternation over every denylisted token, longest first so that
/// multi-word phrases win over their own prefixes at the same position.
pub static RE_DENYLIST: LazyLock<Option<Regex>> = LazyLock::new(|| {
    let mut tokens: Vec<&str> = all_tokens().iter().map(|t| t.token).collect();
    tokens.sort_by_key(|t| std::cmp::Reverse(t.chars().count()));
    let alternation = tokens
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).ok()
});

/// Look up the denylist entry for a matched slice (case-insensitive).
pub fn lookup(matched: &str) -> Option<&'static DenyToken> {
    let lowered = matched.to_lowercase();
    all_tokens().iter().find(|t| t.token == lowered)
}
