//! Proxy error taxonomy
//!
//! Every failure inside the classify handler is caught at the boundary
//! and turned into a structured `{"error": ...}` JSON response. Nothing
//! crashes the process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body carried no image payload
    #[error("No image provided")]
    InvalidInput,

    /// Upstream credential missing from the environment
    #[error("AI service not configured")]
    ServiceUnavailable,

    /// Upstream answered 429
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    /// Upstream answered 402
    #[error("AI service credits exhausted. Please add credits to continue.")]
    QuotaExceeded,

    /// Any other non-success upstream response; raw detail is logged
    /// server-side only
    #[error("AI classification failed")]
    Upstream,

    /// Anything else that escaped the handler
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput => StatusCode::BAD_REQUEST,
            ApiError::ServiceUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::QuotaExceeded => StatusCode::PAYMENT_REQUIRED,
            ApiError::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::InvalidInput.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::ServiceUnavailable.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::RateLimited.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(ApiError::QuotaExceeded.status(), StatusCode::PAYMENT_REQUIRED);
        assert_eq!(ApiError::Upstream.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            ApiError::Internal("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(ApiError::InvalidInput.to_string(), "No image provided");
        assert!(ApiError::RateLimited.to_string().contains("try again later"));
        assert!(ApiError::QuotaExceeded.to_string().contains("credits"));
        // Upstream detail never leaks into the message
        assert_eq!(ApiError::Upstream.to_string(), "AI classification failed");
    }
}
