//! Batch classification
//!
//! The proxy client posts one image per request; the batch runner walks
//! the accepted images strictly sequentially, prepending each success to
//! the session history and carrying on past per-image failures.

use crate::error::{LivestockAiError, Result};
use crate::history::SessionHistory;
use livestock_ai_common::types::{Classification, ClassificationRecord};
use serde::Deserialize;
use serde_json::json;
use std::future::Future;

/// HTTP client for the classification proxy endpoint.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    http: reqwest::Client,
    url: String,
}

/// Error body the proxy returns on failure.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ProxyClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Classify a single image (as a data URL). One attempt, no retry.
    pub async fn classify(&self, image: &str) -> Result<Classification> {
        let response = self
            .http
            .post(&self.url)
            .json(&json!({ "image": image }))
            .send()
            .await
            .map_err(|e| LivestockAiError::ApiCall(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| format!("proxy returned {status}"));
            return Err(LivestockAiError::ApiCall(message));
        }

        response
            .json::<Classification>()
            .await
            .map_err(|e| LivestockAiError::ApiCall(e.to_string()))
    }
}

/// One image queued for classification.
#[derive(Debug, Clone)]
pub struct BatchImage {
    pub file_name: String,
    pub data_url: String,
}

/// A per-image failure the batch carried on past.
#[derive(Debug)]
pub struct BatchFailure {
    pub file_name: String,
    pub message: String,
}

/// Classify a batch sequentially: each call completes, including its
/// error handling, before the next begins. Successes are prepended to
/// `history` as they arrive, so the last classified image ends up at the
/// front. Returns the failures that were skipped over.
pub async fn classify_batch<F, Fut>(
    images: Vec<BatchImage>,
    classify: F,
    history: &mut SessionHistory,
    on_progress: impl Fn(usize, usize),
) -> Vec<BatchFailure>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<Classification>>,
{
    let total = images.len();
    let mut failures = Vec::new();

    for (index, image) in images.into_iter().enumerate() {
        on_progress(index + 1, total);

        match classify(image.data_url.clone()).await {
            Ok(result) => {
                let now_ms = chrono::Utc::now().timestamp_millis();
                let record = ClassificationRecord::new(
                    format!("{now_ms}-{index}"),
                    image.data_url,
                    result,
                    now_ms,
                );
                history.insert(record);
            }
            Err(e) => {
                failures.push(BatchFailure {
                    file_name: image.file_name,
                    message: e.to_string(),
                });
            }
        }
    }

    failures
}
