#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use chrono::TimeZone;
use http_body_util::BodyExt;
use tower::ServiceExt;

use hookreg_api::app::build_app;
use hookreg_api::auth::jwt::{generate_access_token, JwtConfig};
use hookreg_api::config::ServerConfig;
use hookreg_api::state::AppState;
use hookreg_db::MemoryHookStore;
use hookreg_registry::HookRegistry;

const TEST_SECRET: &str = "test-secret-for-hook-registry";

pub fn test_jwt() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        access_token_expiry_mins: 15,
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: test_jwt(),
    }
}

/// A store with two templates, two hooks, and a small permission catalog.
pub fn seeded_store() -> MemoryHookStore {
    let ts = chrono::Utc.with_ymd_and_hms(2026, 4, 2, 10, 0, 0).unwrap();
    MemoryHookStore::new()
        .with_template(1, "Web")
        .with_template(2, "SMS Bridge")
        .with_schema_field(1, "string", "Payload URL", false, None)
        .with_schema_field(1, "string", "Content Type", true, Some("json / form"))
        .with_schema_field(2, "string", "Phone Number", false, None)
        .with_hook(7, "Web", "My Hook", true, ts, ts)
        .with_hook(8, "SMS Bridge", "Alerts", false, ts, ts)
        .with_event(7, "CREATE", "CLIENT")
        .with_config(7, "Payload URL", "https://x")
        .with_config(8, "Phone Number", "555-0100")
        .with_permission("portfolio", "CLIENT", "CREATE")
        .with_permission("portfolio", "CLIENT", "READ")
        .with_permission("portfolio", "LOAN", "APPROVE_CHECKER")
}

/// Build the full application router over an in-memory store.
pub fn build_test_app(store: MemoryHookStore) -> Router {
    let state = AppState {
        registry: HookRegistry::new(store),
        config: Arc::new(test_config()),
    };
    build_app(state)
}

/// A valid bearer token for user 1.
pub fn token() -> String {
    generate_access_token(1, "admin", &test_jwt()).unwrap()
}

/// Send a GET request, optionally authenticated.
pub async fn get(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
