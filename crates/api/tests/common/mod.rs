//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the router directly through `tower::ServiceExt::oneshot`,
//! so no TCP listener is needed.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use roomreel_api::config::ServerConfig;
use roomreel_api::router::build_app_router;
use roomreel_api::state::AppState;
use roomreel_core::reward::{RewardDrawer, DEFAULT_CATALOG};
use roomreel_store::memory::MemoryStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router backed by a fresh seeded store.
///
/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses. The reward drawer is seeded for
/// deterministic draws.
pub fn build_test_app() -> Router {
    build_test_app_with_store(Arc::new(MemoryStore::with_default_challenges()))
}

/// Build the application router over an explicit store, so a test can keep
/// a handle to it and inspect state after requests.
pub fn build_test_app_with_store(store: Arc<MemoryStore>) -> Router {
    let config = Arc::new(test_config());
    let drawer =
        Arc::new(RewardDrawer::with_seed(DEFAULT_CATALOG.to_vec(), 42).expect("valid catalog"));

    let state = AppState {
        store,
        config: config.clone(),
        drawer,
    };

    build_app_router(state, &config)
}

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request"),
    )
    .await
    .expect("request should not fail at the transport level")
}

/// Send a POST request with a JSON body and return the raw response.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("valid request"),
    )
    .await
    .expect("request should not fail at the transport level")
}

/// Send a POST request with a raw (possibly malformed) body.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("valid request"),
    )
    .await
    .expect("request should not fail at the transport level")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Assert a response is an error with the given status and `code` field.
pub async fn assert_error_response(
    response: Response<Body>,
    status: StatusCode,
    code: &str,
) -> serde_json::Value {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["code"], code);
    assert!(json["error"].is_string());
    json
}
