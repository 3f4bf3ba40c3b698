//! Classification result types
//!
//! Shared between CLI and server:
//! - Species: the two-class taxonomy
//! - FeatureSet: per-class supporting feature lists
//! - Classification: the proxy's wire payload
//! - ClassificationRecord: a client-held history entry

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder used when the model omits a feature list or returns an
/// empty one. Feature lists are never empty after normalization.
pub const FEATURE_PLACEHOLDER: &str = "Visual analysis complete";

/// Placeholder feature used when the model reply is not parseable at all.
pub const FALLBACK_FEATURE: &str = "Unable to extract detailed features";

/// The two-class taxonomy. Anything the upstream model returns that is
/// not exactly "buffalo" (case-insensitive) is coerced to Cattle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    #[default]
    Cattle,
    Buffalo,
}

impl Species {
    /// Coerce a parsed prediction string to a species.
    ///
    /// Only an exact (case-insensitive) "buffalo" maps to Buffalo.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("buffalo") {
            Species::Buffalo
        } else {
            Species::Cattle
        }
    }

    /// Word heuristic for unparseable replies: Buffalo if the word
    /// appears anywhere in the text, Cattle otherwise.
    pub fn from_text_heuristic(text: &str) -> Self {
        if text.to_lowercase().contains("buffalo") {
            Species::Buffalo
        } else {
            Species::Cattle
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Cattle => "cattle",
            Species::Buffalo => "buffalo",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual features supporting each class, in model output order.
/// Not deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureSet {
    pub cattle: Vec<String>,
    pub buffalo: Vec<String>,
}

impl FeatureSet {
    /// Both lists set to the post-normalization placeholder.
    pub fn placeholder() -> Self {
        Self {
            cattle: vec![FEATURE_PLACEHOLDER.to_string()],
            buffalo: vec![FEATURE_PLACEHOLDER.to_string()],
        }
    }

    /// Both lists set to the unparseable-reply fallback entry.
    pub fn fallback() -> Self {
        Self {
            cattle: vec![FALLBACK_FEATURE.to_string()],
            buffalo: vec![FALLBACK_FEATURE.to_string()],
        }
    }
}

/// Normalized classification payload returned by the proxy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Classification {
    pub prediction: Species,
    pub confidence: f64,
    pub features: FeatureSet,
}

/// One entry of the session history, created once per successfully
/// classified image and never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationRecord {
    /// Unique per result: "{epoch_ms}-{batch_index}"
    pub id: String,
    /// Data URL of the classified image, kept for the session
    pub image: String,
    pub prediction: Species,
    pub confidence: f64,
    pub features: FeatureSet,
    /// Submission instant, epoch milliseconds
    pub timestamp: i64,
}

impl ClassificationRecord {
    pub fn new(id: String, image: String, result: Classification, timestamp: i64) -> Self {
        Self {
            id,
            image,
            prediction: result.prediction,
            confidence: result.confidence,
            features: result.features,
            timestamp,
        }
    }
}
