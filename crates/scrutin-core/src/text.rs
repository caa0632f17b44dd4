//! Text normalization shared by the loader and the query generator.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lower-case `s`, decompose it (NFD) and drop the combining marks.
///
/// Produces the form stored in the `*_norm` columns, so `LIKE` patterns
/// built from user text match regardless of accents.
pub fn normalize(s: &str) -> String {
    let lowered = s.trim().to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    for c in lowered.nfd().filter(|c| !is_combining_mark(*c)) {
        match c {
            // Ligatures have no canonical decomposition.
            'æ' => out.push_str("ae"),
            'œ' => out.push_str("oe"),
            '\u{2019}' | '\u{2018}' => out.push('\''),
            _ => out.push(c),
        }
    }
    out
}
