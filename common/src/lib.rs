//! Livestock AI Common Library
//!
//! Types and logic shared between the CLI client and the proxy server:
//! - classification result types and their invariants
//! - JSON extraction from free-text model replies
//! - reply normalization (total, never fails)
//! - upload validation rules

pub mod normalizer;
pub mod parser;
pub mod prompts;
pub mod types;
pub mod validator;

pub use normalizer::normalize_reply;
pub use parser::extract_json;
pub use prompts::{SYSTEM_PROMPT, USER_PROMPT};
pub use types::{Classification, ClassificationRecord, FeatureSet, Species};
pub use validator::{validate, CandidateFile, RejectReason, Rejection, MAX_FILE_SIZE};
