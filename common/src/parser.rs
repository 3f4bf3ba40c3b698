//! Model reply JSON extraction
//!
//! The upstream model answers in free text that usually, but not always,
//! contains a JSON object, possibly wrapped in a markdown code fence.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FENCED_JSON: Regex = Regex::new(r"```json\s*([\s\S]*?)\s*```").unwrap();
    static ref FENCED_ANY: Regex = Regex::new(r"```\s*([\s\S]*?)\s*```").unwrap();
}

/// Extract the JSON candidate from a model reply.
///
/// Extraction priority:
/// 1. ```json ... ``` block
/// 2. any ``` ... ``` block
/// 3. the whole reply
///
/// This never fails; when no fence is present the full text is the
/// candidate and it is the caller's job to deal with a parse failure.
pub fn extract_json(response: &str) -> &str {
    if let Some(caps) = FENCED_JSON.captures(response) {
        return caps.get(1).map_or(response, |m| m.as_str());
    }
    if let Some(caps) = FENCED_ANY.captures(response) {
        return caps.get(1).map_or(response, |m| m.as_str());
    }
    response
}
