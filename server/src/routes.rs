//! Classify endpoint
//!
//! Single stateless route: POST /classify with `{"image": "<data-url>"}`.
//! CORS is permissive so the browser client can call the proxy from any
//! origin; preflight OPTIONS is answered by the CORS layer.

use crate::error::ApiError;
use crate::gateway::Gateway;
use axum::extract::State;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method};
use axum::routing::post;
use axum::{Json, Router};
use livestock_ai_common::normalize_reply;
use livestock_ai_common::types::Classification;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<Gateway>,
}

#[derive(Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    image: String,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ]);

    Router::new()
        .route("/classify", post(classify))
        .layer(cors)
        .with_state(state)
}

/// One best-effort classification attempt per request. The upstream
/// credential is read from the environment here, at request time, so a
/// missing key degrades the endpoint instead of failing startup.
async fn classify(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<Classification>, ApiError> {
    if request.image.is_empty() {
        return Err(ApiError::InvalidInput);
    }

    let api_key = std::env::var("LIVESTOCK_API_KEY").map_err(|_| {
        tracing::error!("LIVESTOCK_API_KEY is not configured");
        ApiError::ServiceUnavailable
    })?;

    let reply = state.gateway.classify_image(&api_key, &request.image).await?;
    let result = normalize_reply(&reply);

    tracing::info!(
        prediction = %result.prediction,
        confidence = result.confidence,
        "classification successful"
    );

    Ok(Json(result))
}
