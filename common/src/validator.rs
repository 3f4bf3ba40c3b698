//! Upload validation
//!
//! Filters a batch of candidate files down to images under the size
//! ceiling. Rejected files are reported, never retried, and never abort
//! the rest of the batch.

use std::fmt;
use std::path::Path;

/// Size ceiling per image: 20 MiB.
pub const MAX_FILE_SIZE: u64 = 20 * 1024 * 1024;

/// A file the user submitted for classification, before validation.
#[derive(Debug, Clone)]
pub struct CandidateFile {
    pub name: String,
    /// MIME type if known; `None` means the type could not be determined
    /// and the file is rejected as a non-image.
    pub mime: Option<String>,
    /// Size in bytes
    pub size: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    NotAnImage,
    TooLarge,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::NotAnImage => f.write_str("is not an image file"),
            RejectReason::TooLarge => f.write_str("exceeds 20MB limit"),
        }
    }
}

/// One dropped file with its user-visible reason.
#[derive(Debug, Clone)]
pub struct Rejection {
    pub file_name: String,
    pub reason: RejectReason,
}

/// Split candidates into the accepted subset (order preserved) and one
/// rejection per dropped file.
///
/// A file is dropped when its MIME type does not start with "image/" or
/// its size exceeds [`MAX_FILE_SIZE`].
pub fn validate(candidates: Vec<CandidateFile>) -> (Vec<CandidateFile>, Vec<Rejection>) {
    let mut accepted = Vec::new();
    let mut rejections = Vec::new();

    for candidate in candidates {
        let is_image = candidate
            .mime
            .as_deref()
            .is_some_and(|m| m.starts_with("image/"));

        if !is_image {
            rejections.push(Rejection {
                file_name: candidate.name,
                reason: RejectReason::NotAnImage,
            });
        } else if candidate.size > MAX_FILE_SIZE {
            rejections.push(Rejection {
                file_name: candidate.name,
                reason: RejectReason::TooLarge,
            });
        } else {
            accepted.push(candidate);
        }
    }

    (accepted, rejections)
}

/// MIME type from a file extension, for on-disk candidates.
pub fn mime_from_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        "tif" | "tiff" => Some("image/tiff"),
        _ => None,
    }
}

/// MIME type from magic bytes, for files without a telling extension.
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    image::guess_format(bytes)
        .ok()
        .map(|format| format.to_mime_type())
}
