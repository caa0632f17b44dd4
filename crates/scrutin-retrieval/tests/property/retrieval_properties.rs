//! Property tests: retrieval output bounds hold for any question.

use proptest::prelude::*;

use scrutin_core::config::RetrievalConfig;
use scrutin_retrieval::ExampleRetriever;

fn retriever() -> ExampleRetriever {
    ExampleRetriever::from_config(&RetrievalConfig::default()).unwrap()
}

const WORDS: &[&str] = &[
    "qui", "a", "gagné", "bouaké", "sièges", "rhdp", "parti", "région", "taux", "participation",
    "le", "la", "quel", "voix", "candidats", "abidjan", "bulletins", "nuls", "zzz", "?",
];

proptest! {
    #[test]
    fn at_most_top_k_and_above_threshold(picks in prop::collection::vec(0..WORDS.len(), 0..8)) {
        let question = picks.iter().map(|&i| WORDS[i]).collect::<Vec<_>>().join(" ");
        let ctx = retriever().retrieve(&question);
        let examples = ctx.examples();
        prop_assert!(examples.len() <= 2);
        prop_assert!(examples.iter().all(|e| e.score > 0.5));
        prop_assert!(examples.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn arbitrary_text_never_panics(question in ".{0,80}") {
        let _ = retriever().retrieve(&question);
    }
}
