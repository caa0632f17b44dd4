//! Okapi BM25 over pre-tokenized documents.

use std::collections::HashMap;

use scrutin_core::config::RetrievalConfig;

/// BM25 tuning constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bm25Params {
    pub k1: f64,
    pub b: f64,
    /// Negative IDFs are replaced by `epsilon * mean(idf)`.
    pub epsilon: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self::from(&RetrievalConfig::default())
    }
}

impl From<&RetrievalConfig> for Bm25Params {
    fn from(config: &RetrievalConfig) -> Self {
        Self {
            k1: config.k1,
            b: config.b,
            epsilon: config.epsilon,
        }
    }
}

/// Immutable BM25 index. Build once, score many times.
#[derive(Debug, Clone)]
pub struct Bm25Index {
    params: Bm25Params,
    doc_freqs: Vec<HashMap<String, usize>>,
    doc_len: Vec<usize>,
    avgdl: f64,
    idf: HashMap<String, f64>,
}

impl Bm25Index {
    pub fn build(corpus: &[Vec<String>], params: Bm25Params) -> Self {
        let mut doc_freqs = Vec::with_capacity(corpus.len());
        let mut doc_len = Vec::with_capacity(corpus.len());
        // Number of documents containing each term.
        let mut containing: HashMap<String, usize> = HashMap::new();

        for doc in corpus {
            let mut freqs: HashMap<String, usize> = HashMap::new();
            for term in doc {
                *freqs.entry(term.clone()).or_default() += 1;
            }
            for term in freqs.keys() {
                *containing.entry(term.clone()).or_default() += 1;
            }
            doc_len.push(doc.len());
            doc_freqs.push(freqs);
        }

        let total_len: usize = doc_len.iter().sum();
        let avgdl = if total_len == 0 {
            1.0
        } else {
            total_len as f64 / corpus.len() as f64
        };

        let idf = compute_idf(&containing, corpus.len(), params.epsilon);

        Self {
            params,
            doc_freqs,
            doc_len,
            avgdl,
            idf,
        }
    }

    pub fn len(&self) -> usize {
        self.doc_len.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc_len.is_empty()
    }

    /// IDF of a term, or `None` if no document contains it.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    /// One score per document, in corpus order. Repeated query terms count
    /// once per occurrence.
    pub fn scores(&self, query: &[String]) -> Vec<f64> {
        let Bm25Params { k1, b, .. } = self.params;
        let mut scores = vec![0.0; self.len()];

        for term in query {
            let Some(idf) = self.idf(term) else {
                continue;
            };
            for (i, freqs) in self.doc_freqs.iter().enumerate() {
                let tf = freqs.get(term).copied().unwrap_or(0) as f64;
                if tf == 0.0 {
                    continue;
                }
                let norm = 1.0 - b + b * self.doc_len[i] as f64 / self.avgdl;
                scores[i] += idf * (tf * (k1 + 1.0)) / (tf + k1 * norm);
            }
        }

        scores
    }
}

fn compute_idf(containing: &HashMap<String, usize>, n_docs: usize, epsilon: f64) -> HashMap<String, f64> {
    let n = n_docs as f64;
    let mut idf = HashMap::with_capacity(containing.len());
    let mut negative = Vec::new();
    let mut sum = 0.0;

    for (term, &df) in containing {
        let df = df as f64;
        let value = (n - df + 0.5).ln() - (df + 0.5).ln();
        sum += value;
        if value < 0.0 {
            negative.push(term.clone());
        }
        idf.insert(term.clone(), value);
    }

    if !idf.is_empty() {
        let floor = epsilon * sum / idf.len() as f64;
        for term in negative {
            idf.insert(term, floor);
        }
    }

    idf
}
