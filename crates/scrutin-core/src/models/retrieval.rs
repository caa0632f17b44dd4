//! Advisory worked examples handed to the query generator.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// One corpus example that scored above the relevance threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleMatch {
    pub question: String,
    pub sql: String,
    pub explanation: String,
    pub score: f64,
}

/// Outcome of example retrieval. Never affects routing, only prompt text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "examples", rename_all = "snake_case")]
pub enum RetrievalContext {
    /// 1..=top_k examples, best first.
    Examples(Vec<ExampleMatch>),
    /// Only stop-words survived tokenization; nothing was scored.
    NoKeywords,
    /// Scoring ran but nothing cleared the threshold.
    NoRelevantExamples,
    /// The example corpus is empty.
    Unavailable,
}

impl RetrievalContext {
    pub fn examples(&self) -> &[ExampleMatch] {
        match self {
            Self::Examples(matches) => matches,
            _ => &[],
        }
    }

    /// Text block injected into the generation prompt.
    pub fn render(&self) -> String {
        match self {
            Self::NoKeywords => "Aucun mot-clé pertinent détecté.".to_string(),
            Self::NoRelevantExamples => "Pas d'exemples pertinents disponibles.".to_string(),
            Self::Unavailable => "Erreur technique (base d'exemples vide).".to_string(),
            Self::Examples(matches) => {
                let mut out = String::new();
                for m in matches {
                    let _ = writeln!(out, "--- EXEMPLE SIMILAIRE (Score: {:.2}) ---", m.score);
                    let _ = writeln!(out, "Question : {}", m.question);
                    let _ = writeln!(out, "Raisonnement : {}", m.explanation);
                    let _ = writeln!(out, "SQL : {}", m.sql);
                    out.push('\n');
                }
                out
            }
        }
    }
}
