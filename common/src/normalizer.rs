//! Model reply normalization
//!
//! Turns the upstream model's free-text reply into a well-formed
//! [`Classification`]. Total by contract: any input string, including
//! garbage, produces a valid payload. A parse error is never surfaced.

use crate::parser::extract_json;
use crate::types::{Classification, FeatureSet, Species, FEATURE_PLACEHOLDER};
use serde_json::Value;

/// Confidence reported when the reply could not be parsed as JSON.
const FALLBACK_CONFIDENCE: f64 = 0.75;

/// Confidence assumed when the parsed JSON omits the field or the
/// value is not numeric.
const DEFAULT_CONFIDENCE: f64 = 0.5;

/// Normalize a raw model reply into a classification payload.
///
/// Steps:
/// 1. extract the JSON candidate (fenced block or whole text)
/// 2. parse; on failure, fall back to the word heuristic
/// 3. coerce prediction, clamp confidence, substitute placeholder
///    features for missing, non-array or empty lists
pub fn normalize_reply(reply: &str) -> Classification {
    match serde_json::from_str::<Value>(extract_json(reply)) {
        Ok(value) => normalize_value(&value),
        Err(_) => heuristic_fallback(reply),
    }
}

fn normalize_value(value: &Value) -> Classification {
    let prediction = value
        .get("prediction")
        .and_then(Value::as_str)
        .map(Species::from_label)
        .unwrap_or(Species::Cattle);

    let confidence = value
        .get("confidence")
        .and_then(Value::as_f64)
        .unwrap_or(DEFAULT_CONFIDENCE)
        .clamp(0.0, 1.0);

    Classification {
        prediction,
        confidence,
        features: FeatureSet {
            cattle: feature_list(value, "cattle"),
            buffalo: feature_list(value, "buffalo"),
        },
    }
}

fn heuristic_fallback(reply: &str) -> Classification {
    Classification {
        prediction: Species::from_text_heuristic(reply),
        confidence: FALLBACK_CONFIDENCE,
        features: FeatureSet::fallback(),
    }
}

/// One class's feature list from `features.<key>`. Anything that is not
/// a non-empty array collapses to the placeholder; non-string items are
/// stringified rather than dropped.
fn feature_list(value: &Value, key: &str) -> Vec<String> {
    value
        .get("features")
        .and_then(|f| f.get(key))
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .map(|items| {
            items
                .iter()
                .map(|v| match v.as_str() {
                    Some(s) => s.to_string(),
                    None => v.to_string(),
                })
                .collect()
        })
        .unwrap_or_else(|| vec![FEATURE_PLACEHOLDER.to_string()])
}
