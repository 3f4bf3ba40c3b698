//! Classify endpoint tests
//!
//! Drives the router directly with `tower::ServiceExt::oneshot`; upstream
//! behavior is simulated by a local mock gateway. All cases live in one
//! test because they share the LIVESTOCK_API_KEY environment variable.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::post;
use axum::Router;
use http_body_util::BodyExt;
use livestock_ai_server::{router, AppState, Gateway};
use std::sync::Arc;
use tower::ServiceExt;

/// Start a mock gateway that answers every chat-completions call with a
/// fixed status and body; returns the endpoint URL.
async fn spawn_upstream(status: StatusCode, body: &'static str) -> String {
    let app = Router::new().route(
        "/v1/chat/completions",
        post(move || async move { (status, body) }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/v1/chat/completions")
}

fn app_for(url: &str) -> Router {
    router(AppState {
        gateway: Arc::new(Gateway::new(url, "google/gemini-2.5-flash")),
    })
}

async fn post_classify(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/classify")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

const IMAGE_BODY: &str = r#"{"image": "data:image/png;base64,iVBORw0KGgo="}"#;

/// Chat-completions reply whose content wraps the classification JSON in
/// a markdown fence, matching how the model usually answers.
const FENCED_REPLY: &str = r#"{"choices":[{"message":{"role":"assistant","content":"```json\n{\"prediction\": \"Buffalo\", \"confidence\": 1.4, \"features\": {\"cattle\": [], \"buffalo\": [\"large horns\"]}}\n```"}}]}"#;

#[tokio::test]
async fn classify_endpoint_paths() {
    // Cases run sequentially: they share the credential env var.
    std::env::remove_var("LIVESTOCK_API_KEY");

    // Empty image payload -> 400, before any upstream traffic
    let (status, body) = post_classify(app_for("http://127.0.0.1:9/unused"), r#"{"image": ""}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No image provided");

    // Missing field counts as missing payload
    let (status, _) = post_classify(app_for("http://127.0.0.1:9/unused"), "{}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Credential absent -> 500, not a startup failure
    let (status, body) = post_classify(app_for("http://127.0.0.1:9/unused"), IMAGE_BODY).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "AI service not configured");

    std::env::set_var("LIVESTOCK_API_KEY", "test-key");

    // Upstream 429 -> 429 with the rate-limit message
    let url = spawn_upstream(StatusCode::TOO_MANY_REQUESTS, "slow down").await;
    let (status, body) = post_classify(app_for(&url), IMAGE_BODY).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["error"], "Rate limit exceeded. Please try again later.");

    // Upstream 402 -> 402 with the quota message
    let url = spawn_upstream(StatusCode::PAYMENT_REQUIRED, "no credits").await;
    let (status, body) = post_classify(app_for(&url), IMAGE_BODY).await;
    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
    assert_eq!(
        body["error"],
        "AI service credits exhausted. Please add credits to continue."
    );

    // Any other upstream failure -> 500 with the generic message
    let url = spawn_upstream(StatusCode::SERVICE_UNAVAILABLE, "internal detail").await;
    let (status, body) = post_classify(app_for(&url), IMAGE_BODY).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "AI classification failed");

    // Success: fenced reply is normalized before it reaches the caller
    let url = spawn_upstream(StatusCode::OK, FENCED_REPLY).await;
    let (status, body) = post_classify(app_for(&url), IMAGE_BODY).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prediction"], "buffalo");
    assert_eq!(body["confidence"], 1.0);
    assert_eq!(body["features"]["cattle"][0], "Visual analysis complete");
    assert_eq!(body["features"]["buffalo"][0], "large horns");
}

#[tokio::test]
async fn preflight_is_answered_permissively() {
    let app = app_for("http://127.0.0.1:9/unused");

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/classify")
                .header("origin", "https://example.com")
                .header("access-control-request-method", "POST")
                .header("access-control-request-headers", "content-type, apikey")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}
