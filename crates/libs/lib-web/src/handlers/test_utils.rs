//! Helpers for driving the full router in handler tests.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use lib_core::{Config, DbPool};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::server::{create_router, AppState};

pub const TEST_SECRET: &str = "test-secret-key-must-be-at-least-32-characters-long!";
pub const TEST_PASSWORD: &str = "TestPassword123!";

/// In-memory database with the schema applied.
pub async fn setup_test_db() -> DbPool {
    lib_core::create_memory_pool()
        .await
        .expect("Failed to create test database")
}

pub fn test_config() -> Config {
    Config::new("sqlite::memory:", TEST_SECRET)
}

pub fn test_app(pool: DbPool, config: Config) -> Router {
    create_router(AppState { db: pool, config })
}

pub async fn new_app() -> Router {
    test_app(setup_test_db().await, test_config())
}

/// Send one request and return the status and parsed JSON body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

/// POST a raw body, for requests `send` cannot express.
pub async fn send_raw(
    app: &Router,
    uri: &str,
    token: Option<&str>,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

/// Register a user and return its token.
pub async fn register(app: &Router, name: &str, email: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/user/register",
        None,
        Some(json!({ "name": name, "email": email, "password": TEST_PASSWORD })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true, "register failed: {body}");
    body["token"].as_str().expect("token in body").to_string()
}

pub async fn create_chat(app: &Router, token: &str) -> String {
    let (_, body) = send(app, "POST", "/api/chat/create", Some(token), Some(json!({}))).await;
    assert_eq!(body["success"], true, "create failed: {body}");
    body["chat"]["_id"].as_str().expect("chat id").to_string()
}
