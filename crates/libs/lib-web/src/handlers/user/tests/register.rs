//! # Register Tests

use crate::handlers::test_utils::*;
use axum::http::StatusCode;
use lib_auth::verify_token;
use serde_json::json;

#[tokio::test]
async fn test_register_success() {
    // Arrange
    let app = new_app().await;

    // Act
    let (status, body) = send(
        &app,
        "POST",
        "/api/user/register",
        None,
        Some(json!({ "name": "Alice", "email": "alice@example.com", "password": TEST_PASSWORD })),
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let token = body["token"].as_str().unwrap();
    assert!(verify_token(token, TEST_SECRET).is_ok());
}

#[tokio::test]
async fn test_register_twice_conflicts() {
    let app = new_app().await;
    register(&app, "Alice", "alice@example.com").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/user/register",
        None,
        Some(json!({ "name": "Alice Again", "email": "  ALICE@example.com ", "password": TEST_PASSWORD })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "User already exists");
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn test_register_rejects_malformed_input() {
    let app = new_app().await;

    let cases = [
        (json!({ "name": "  ", "email": "a@example.com", "password": TEST_PASSWORD }), "Name cannot be empty"),
        (json!({ "name": "Alice", "email": "not-an-email", "password": TEST_PASSWORD }), "Invalid email format"),
        (json!({ "name": "Alice", "email": "a@example.com", "password": "short" }), "Password must be at least 8 characters long"),
    ];

    for (payload, expected) in cases {
        let (status, body) = send(&app, "POST", "/api/user/register", None, Some(payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], expected);
    }
}

#[tokio::test]
async fn test_register_missing_field_is_json_failure() {
    let app = new_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/user/register",
        None,
        Some(json!({ "email": "a@example.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    let message = body["message"].as_str().unwrap();
    assert_eq!(message, "Invalid request body");
    assert!(!message.contains("deserialize"), "{message}");
    assert!(!message.contains("missing field"), "{message}");
}
