//! Preview encoding
//!
//! Reads an accepted image into a base64 data URL, the form both the
//! preview display and the proxy request use. Batch encoding runs the
//! reads concurrently; results arrive in completion order, one per file,
//! and callers reassemble by index.

use crate::error::{LivestockAiError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use livestock_ai_common::validator::{mime_from_extension, sniff_mime};
use std::path::{Path, PathBuf};
use tokio::task::JoinSet;

/// Read one file into a `data:<mime>;base64,<payload>` string.
pub async fn encode_data_url(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| LivestockAiError::ImageLoad(format!("{}: {}", path.display(), e)))?;

    let mime = mime_from_extension(path)
        .or_else(|| sniff_mime(&bytes))
        .unwrap_or("image/jpeg");

    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(&bytes)))
}

/// Encode a batch concurrently. Returns `(input_index, result)` pairs in
/// completion order; every input index appears exactly once.
pub async fn encode_batch(paths: &[PathBuf]) -> Vec<(usize, Result<String>)> {
    let mut set = JoinSet::new();

    for (index, path) in paths.iter().enumerate() {
        let path = path.clone();
        set.spawn(async move { (index, encode_data_url(&path).await) });
    }

    let mut encoded = Vec::with_capacity(paths.len());
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok(pair) => encoded.push(pair),
            Err(e) => {
                // A panicked read task loses its index; surface it as a
                // generic load failure at the end of the batch.
                encoded.push((
                    usize::MAX,
                    Err(LivestockAiError::ImageLoad(e.to_string())),
                ));
            }
        }
    }
    encoded
}
