//! Pulling structured data out of model replies.
//!
//! Models asked for JSON still wrap it in code fences or add a sentence
//! before it. The first balanced `{...}` object in the reply is taken.

use serde::de::DeserializeOwned;

use scrutin_core::errors::CompletionError;

/// Slice of `text` spanning the first balanced JSON object, if any.
///
/// Braces inside string literals are ignored.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Deserialize the first JSON object found in `text`.
pub fn parse_structured<T: DeserializeOwned>(text: &str) -> Result<T, CompletionError> {
    let object = extract_json_object(text).ok_or_else(|| CompletionError::MalformedResponse {
        reason: "no JSON object in reply".to_string(),
    })?;
    serde_json::from_str(object).map_err(|e| CompletionError::MalformedResponse {
        reason: e.to_string(),
    })
}
