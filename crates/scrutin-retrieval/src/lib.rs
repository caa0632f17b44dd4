//! # scrutin-retrieval
//!
//! Worked-example retrieval for the query generator.
//! A small BM25 index over the questions of a curated corpus of
//! (question, SQL, explanation) triples, queried once per run.

pub mod bm25;
pub mod corpus;
pub mod retriever;
pub mod tokenizer;

pub use bm25::{Bm25Index, Bm25Params};
pub use corpus::{Corpus, Example};
pub use retriever::ExampleRetriever;
