//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use hookreg_db::MemoryHookStore;

#[tokio::test]
async fn health_check_returns_ok_without_auth() {
    let app = common::build_test_app(MemoryHookStore::new());
    let response = get(app, "/health", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_test_app(MemoryHookStore::new());
    let response = get(app, "/health", None).await;

    assert!(
        response.headers().get("x-request-id").is_some(),
        "Response must contain an x-request-id header"
    );
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::build_test_app(MemoryHookStore::new());
    let response = get(app, "/this-route-does-not-exist", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
