//! Result export
//!
//! Writes a single classification record as a formatted JSON report,
//! the CLI counterpart of the browser's "download result" action. The
//! image payload itself is not exported.

use crate::error::Result;
use chrono::{TimeZone, Utc};
use livestock_ai_common::types::{ClassificationRecord, FeatureSet, Species};
use serde::Serialize;
use std::path::Path;

/// Exported shape: prediction, confidence, features, ISO-8601 timestamp.
#[derive(Debug, Serialize)]
pub struct ClassificationReport {
    pub prediction: Species,
    pub confidence: f64,
    pub features: FeatureSet,
    pub timestamp: String,
}

impl ClassificationReport {
    pub fn from_record(record: &ClassificationRecord) -> Self {
        let timestamp = Utc
            .timestamp_millis_opt(record.timestamp)
            .single()
            .unwrap_or_else(Utc::now)
            .to_rfc3339();

        Self {
            prediction: record.prediction,
            confidence: record.confidence,
            features: record.features.clone(),
            timestamp,
        }
    }
}

/// Default report file name for a record id.
pub fn report_file_name(id: &str) -> String {
    format!("classification-{id}.json")
}

/// Write the report as pretty-printed JSON.
pub fn write_report(record: &ClassificationRecord, path: &Path) -> Result<()> {
    let report = ClassificationReport::from_record(record);
    let json = serde_json::to_string_pretty(&report)?;
    std::fs::write(path, json)?;
    Ok(())
}
