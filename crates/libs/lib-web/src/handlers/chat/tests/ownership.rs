//! # Ownership Tests
//!
//! One user can never see, change or delete another user's chats, and cannot
//! tell a foreign chat id from a nonexistent one.

use crate::handlers::test_utils::*;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_alice_and_bob() {
    let app = new_app().await;

    // alice registers and creates a chat
    let alice = register(&app, "Alice", "alice@example.com").await;
    let chat_id = create_chat(&app, &alice).await;

    let (_, body) = send(&app, "GET", "/api/chat/get", Some(&alice), None).await;
    let chats = body["chats"].as_array().unwrap();
    assert_eq!(chats.len(), 1);
    assert_eq!(chats[0]["_id"], chat_id.as_str());
    let alice_id = chats[0]["userId"].clone();

    // bob registers, logs in and lists nothing
    register(&app, "Bob", "bob@example.com").await;
    let (_, body) = send(
        &app,
        "POST",
        "/api/user/login",
        None,
        Some(json!({ "email": "bob@example.com", "password": TEST_PASSWORD })),
    )
    .await;
    let bob = body["token"].as_str().unwrap().to_string();

    let (_, body) = send(&app, "GET", "/api/chat/get", Some(&bob), None).await;
    assert_eq!(body["chats"], json!([]));

    // bob tries to delete alice's chat
    let (status, body) = send(
        &app,
        "POST",
        "/api/chat/delete",
        Some(&bob),
        Some(json!({ "chatId": chat_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);

    // alice still has it
    let (_, body) = send(&app, "GET", "/api/chat/get", Some(&alice), None).await;
    let chats = body["chats"].as_array().unwrap();
    assert_eq!(chats.len(), 1);
    assert_eq!(chats[0]["_id"], chat_id.as_str());
    assert_eq!(chats[0]["userId"], alice_id);
}

#[tokio::test]
async fn test_foreign_delete_matches_missing_delete() {
    let app = new_app().await;
    let alice = register(&app, "Alice", "alice@example.com").await;
    let bob = register(&app, "Bob", "bob@example.com").await;
    let chat_id = create_chat(&app, &alice).await;

    let foreign = send(&app, "POST", "/api/chat/delete", Some(&bob), Some(json!({ "chatId": chat_id }))).await;
    let missing = send(
        &app,
        "POST",
        "/api/chat/delete",
        Some(&bob),
        Some(json!({ "chatId": "00000000-0000-0000-0000-000000000000" })),
    )
    .await;

    assert_eq!(foreign, missing);
    assert_eq!(foreign.1["message"], "Chat not found");
}

#[tokio::test]
async fn test_body_user_id_is_ignored() {
    let app = new_app().await;
    let alice = register(&app, "Alice", "alice@example.com").await;
    let bob = register(&app, "Bob", "bob@example.com").await;
    let chat_id = create_chat(&app, &alice).await;

    let (_, alice_data) = send(&app, "GET", "/api/user/data", Some(&alice), None).await;
    let (_, body) = send(
        &app,
        "POST",
        "/api/chat/delete",
        Some(&bob),
        Some(json!({ "chatId": chat_id, "userId": alice_data["user"]["_id"] })),
    )
    .await;

    assert_eq!(body["success"], false);
}
