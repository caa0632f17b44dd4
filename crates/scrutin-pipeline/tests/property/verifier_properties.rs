//! Property tests for candidate sanitizing and the static verifier checks.

use proptest::prelude::*;
use scrutin_core::constants::{ALLOWED_OBJECTS, FORBIDDEN_STATEMENTS};
use scrutin_pipeline::sanitize_completion;
use scrutin_pipeline::verifier::{forbidden_keyword, referenced_objects};

proptest! {
    #[test]
    fn sanitized_output_is_trimmed_and_single_statement(raw in ".{0,200}") {
        if let Some(sql) = sanitize_completion(&raw) {
            prop_assert!(!sql.is_empty());
            prop_assert_eq!(sql.trim(), sql.as_str());
            prop_assert!(!sql.contains(';'));
            prop_assert!(!sql.contains("```"));
        }
    }

    #[test]
    fn prose_before_select_is_dropped(prefix in "[a-z ]{0,40}", column in "[a-z_]{1,12}") {
        prop_assume!(!prefix.contains("select") && !prefix.contains("with"));
        let raw = format!("{prefix}\nSELECT {column} FROM candidats;");
        prop_assert_eq!(
            sanitize_completion(&raw),
            Some(format!("SELECT {column} FROM candidats"))
        );
    }

    #[test]
    fn forbidden_keywords_are_found_in_any_case(
        idx in 0..FORBIDDEN_STATEMENTS.len(),
        mask in proptest::collection::vec(any::<bool>(), 8),
    ) {
        let keyword = FORBIDDEN_STATEMENTS[idx];
        let mixed: String = keyword
            .chars()
            .zip(mask.iter().cycle())
            .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
            .collect();
        let sql = format!("SELECT 1 FROM candidats; {mixed} x");
        prop_assert_eq!(forbidden_keyword(&sql), Some(keyword.to_string()));
    }

    #[test]
    fn allowlisted_sources_are_extracted(idx in 0..ALLOWED_OBJECTS.len(), alias in "[a-z]{1,3}") {
        let object = ALLOWED_OBJECTS[idx];
        let sql = format!("SELECT * FROM {object} {alias} WHERE 1 = 1");
        prop_assert_eq!(referenced_objects(&sql), vec![object.to_string()]);
    }
}
