use proptest::prelude::*;
use scrutin_guardrail::patterns::all_tokens;
use scrutin_guardrail::{GuardrailVerdict, LexicalGuardrail};

fn mixed_case(token: &str, mask: &[bool]) -> String {
    token
        .chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_uppercase().collect::<String>()
            } else {
                c.to_string()
            }
        })
        .collect()
}

proptest! {
    // Any denylisted token, in any casing, surrounded by ordinary words is blocked,
    // and the reported token is that entry (or a longer phrase containing it).
    #[test]
    fn denylisted_token_in_any_case_is_blocked(
        idx in 0..all_tokens().len(),
        mask in prop::collection::vec(any::<bool>(), 1..8),
        prefix in "(quels|les|résultats|à) ",
        suffix in " (maintenant|svp|merci)",
    ) {
        let entry = &all_tokens()[idx];
        let question = format!("{prefix}{}{suffix}", mixed_case(entry.token, &mask));
        match LexicalGuardrail::new().check(&question) {
            GuardrailVerdict::Blocked { token, .. } => {
                prop_assert!(
                    token.contains(entry.token) || entry.token.contains(token),
                    "expected {} got {}", entry.token, token
                );
            }
            GuardrailVerdict::Pass => prop_assert!(false, "not blocked: {question}"),
        }
    }

    #[test]
    fn plain_lowercase_letters_without_spaces_never_panic(text in "[a-z]{0,40}") {
        let _ = LexicalGuardrail::new().check(&text);
    }
}
