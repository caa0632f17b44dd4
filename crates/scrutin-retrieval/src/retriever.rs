//! Example retrieval: tokenize, score, threshold.

use std::sync::OnceLock;

use tracing::{debug, info, warn};

use scrutin_core::config::RetrievalConfig;
use scrutin_core::errors::RetrievalError;
use scrutin_core::models::{ExampleMatch, RetrievalContext};

use crate::bm25::{Bm25Index, Bm25Params};
use crate::corpus::Corpus;
use crate::tokenizer::tokenize;

/// Retrieves the worked examples closest to a question.
///
/// The BM25 index is built on first use and never mutated afterwards, so a
/// single retriever can be shared across runs behind an `Arc`.
pub struct ExampleRetriever {
    corpus: Corpus,
    params: Bm25Params,
    top_k: usize,
    min_score: f64,
    index: OnceLock<Bm25Index>,
}

impl ExampleRetriever {
    pub fn new(corpus: Corpus, config: &RetrievalConfig) -> Self {
        Self {
            corpus,
            params: Bm25Params::from(config),
            top_k: config.top_k,
            min_score: config.min_score,
            index: OnceLock::new(),
        }
    }

    /// Use `config.corpus_path` when set, the built-in corpus otherwise.
    pub fn from_config(config: &RetrievalConfig) -> Result<Self, RetrievalError> {
        let corpus = match &config.corpus_path {
            Some(path) => Corpus::from_path(std::path::Path::new(path))?,
            None => Corpus::builtin()?,
        };
        info!(examples = corpus.len(), "example corpus loaded");
        Ok(Self::new(corpus, config))
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    fn index(&self) -> &Bm25Index {
        self.index.get_or_init(|| {
            let docs: Vec<Vec<String>> = self
                .corpus
                .examples()
                .iter()
                .map(|e| tokenize(&e.question))
                .collect();
            debug!(documents = docs.len(), "building BM25 index");
            Bm25Index::build(&docs, self.params)
        })
    }

    pub fn retrieve(&self, question: &str) -> RetrievalContext {
        if self.corpus.is_empty() {
            warn!("example corpus is empty");
            return RetrievalContext::Unavailable;
        }

        let keywords = tokenize(question);
        if keywords.is_empty() {
            debug!("no keywords after stop-word removal");
            return RetrievalContext::NoKeywords;
        }

        let scores = self.index().scores(&keywords);
        let mut order: Vec<usize> = (0..scores.len()).collect();
        // Stable: equal scores keep corpus order.
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

        let matches: Vec<ExampleMatch> = order
            .into_iter()
            .take(self.top_k)
            .filter(|&i| scores[i] > self.min_score)
            .filter_map(|i| {
                self.corpus.get(i).map(|e| ExampleMatch {
                    question: e.question.clone(),
                    sql: e.sql.clone(),
                    explanation: e.explanation.clone(),
                    score: scores[i],
                })
            })
            .collect();

        if matches.is_empty() {
            debug!(keywords = ?keywords, "no example above threshold");
            RetrievalContext::NoRelevantExamples
        } else {
            debug!(found = matches.len(), best = matches[0].score, "examples retrieved");
            RetrievalContext::Examples(matches)
        }
    }
}
