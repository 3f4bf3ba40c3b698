//! Livestock AI classification proxy
//!
//! Stateless HTTP service that forwards one image per request to the
//! multimodal AI gateway and returns the normalized classification.

pub mod error;
pub mod gateway;
pub mod routes;

pub use error::ApiError;
pub use gateway::Gateway;
pub use routes::{router, AppState};
