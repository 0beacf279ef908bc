//! # Chat CRUD Tests

use crate::handlers::chat::CHAT_DELETED_MESSAGE;
use crate::handlers::test_utils::*;
use axum::http::StatusCode;
use serde_json::json;
use std::collections::HashSet;

#[tokio::test]
async fn test_create_returns_empty_new_chat() {
    let app = new_app().await;
    let token = register(&app, "Alice", "alice@example.com").await;

    let (status, body) = send(&app, "POST", "/api/chat/create", Some(&token), Some(json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["chat"]["name"], "New Chat");
    assert_eq!(body["chat"]["messages"], json!([]));
    assert!(body["chat"]["userId"].is_string());
}

#[tokio::test]
async fn test_list_n_chats_most_recent_first() {
    let app = new_app().await;
    let token = register(&app, "Alice", "alice@example.com").await;

    let mut created = Vec::new();
    for _ in 0..4 {
        created.push(create_chat(&app, &token).await);
    }

    let (status, body) = send(&app, "GET", "/api/chat/get", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let listed: Vec<String> = body["chats"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["_id"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(listed.len(), 4);
    assert_eq!(listed.iter().collect::<HashSet<_>>().len(), 4);
    created.reverse();
    assert_eq!(listed, created);
}

#[tokio::test]
async fn test_delete_own_chat() {
    let app = new_app().await;
    let token = register(&app, "Alice", "alice@example.com").await;
    let chat_id = create_chat(&app, &token).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/chat/delete",
        Some(&token),
        Some(json!({ "chatId": chat_id })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], CHAT_DELETED_MESSAGE);

    let (_, body) = send(&app, "GET", "/api/chat/get", Some(&token), None).await;
    assert_eq!(body["chats"], json!([]));
}

#[tokio::test]
async fn test_chat_routes_require_token() {
    let app = new_app().await;

    for (method, uri) in [
        ("GET", "/api/chat/get"),
        ("POST", "/api/chat/create"),
        ("POST", "/api/chat/delete"),
        ("POST", "/api/chat/message"),
    ] {
        let (status, body) = send(&app, method, uri, None, Some(json!({}))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert_eq!(body["success"], false);
    }
}

#[tokio::test]
async fn test_bad_delete_bodies_keep_the_failure_envelope() {
    let app = new_app().await;
    let token = register(&app, "Alice", "alice@example.com").await;
    let chat_id = create_chat(&app, &token).await;

    let (status, body) = send(&app, "POST", "/api/chat/delete", Some(&token), Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid request body");

    let cases = [
        (Some("application/json"), "{\"chatId\":", "Malformed JSON body"),
        (None, "{}", "Expected a JSON request body"),
    ];
    for (content_type, raw, expected) in cases {
        let (status, body) = send_raw(&app, "/api/chat/delete", Some(&token), content_type, raw).await;
        assert_eq!(status, StatusCode::OK, "{raw}");
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], expected);
    }

    // Nothing was deleted along the way.
    let (_, body) = send(&app, "GET", "/api/chat/get", Some(&token), None).await;
    assert_eq!(body["chats"][0]["_id"], chat_id.as_str());
}
