//! # scrutin-llm
//!
//! Client for OpenAI-compatible chat-completions endpoints (Mistral by
//! default), implementing `ICompletionService`, plus helpers to pull a JSON
//! object out of a free-form model reply.

pub mod client;
pub mod protocol;
pub mod structured;

pub use client::ChatCompletionClient;
pub use structured::{extract_json_object, parse_structured};
