//! Keyword extraction for French questions.

/// Words carrying no retrieval signal: articles and liaisons, copulas and
/// pronouns, vague interrogatives. Elided forms (`l'`, `d'`, `qu'`) appear
/// without their apostrophe because apostrophes are split on.
pub const STOP_WORDS: &[&str] = &[
    // articles, liaisons
    "le", "la", "les", "l", "un", "une", "des", "du", "de", "d", "et", "ou", "mais", "donc", "or",
    "ni", "car", "à", "au", "aux", "dans", "sur", "par", "pour", "en", "vers", "avec", "sans",
    "sous",
    // copulas, pronouns
    "est", "sont", "a", "ont", "avez", "suis", "es", "être", "avoir", "faire", "je", "tu", "il",
    "elle", "nous", "vous", "ils", "elles", "ce", "se", "sa", "son", "ses", "cette", "ces", "c",
    "s", "j", "n",
    // vague interrogatives
    "quel", "quelle", "quels", "quelles", "est-ce", "qu", "que", "quoi", "comment",
];

/// Lower-case, split on anything that is neither alphanumeric nor a hyphen,
/// and drop stop-words. Hyphens inside words (`ppa-ci`, `sous-préfecture`)
/// are kept; hyphens at either end of a token are not.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !c.is_alphanumeric() && c != '-')
        .map(|t| t.trim_matches('-'))
        .filter(|t| !t.is_empty() && !is_stop_word(t))
        .map(str::to_string)
        .collect()
}

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_stop_words_and_punctuation() {
        assert_eq!(tokenize("Qui a gagné à Bouaké ?"), vec!["qui", "gagné", "bouaké"]);
    }

    #[test]
    fn splits_elisions() {
        assert_eq!(tokenize("Quel est l'élu d'Abidjan"), vec!["élu", "abidjan"]);
        assert_eq!(tokenize("qu’est-ce"), Vec::<String>::new());
    }

    #[test]
    fn keeps_inner_hyphens() {
        assert_eq!(tokenize("Score du PPA-CI - Korhogo"), vec!["score", "ppa-ci", "korhogo"]);
    }

    #[test]
    fn stop_words_only_is_empty() {
        assert!(tokenize("Quel est le ?").is_empty());
        assert!(tokenize("").is_empty());
    }
}
