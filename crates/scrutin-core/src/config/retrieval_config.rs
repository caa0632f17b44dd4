use serde::{Deserialize, Serialize};

use super::defaults;

/// Worked-example retrieval configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// BM25 term-frequency saturation.
    pub k1: f64,
    /// BM25 length normalization.
    pub b: f64,
    /// Floor applied to negative IDF values, as a fraction of the mean IDF.
    pub epsilon: f64,
    /// Maximum number of examples injected into the generation prompt.
    pub top_k: usize,
    /// Examples scoring at or below this are discarded.
    pub min_score: f64,
    /// Optional JSON corpus replacing the built-in examples.
    pub corpus_path: Option<String>,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            k1: defaults::DEFAULT_BM25_K1,
            b: defaults::DEFAULT_BM25_B,
            epsilon: defaults::DEFAULT_BM25_EPSILON,
            top_k: defaults::DEFAULT_TOP_K,
            min_score: defaults::DEFAULT_MIN_SCORE,
            corpus_path: None,
        }
    }
}
