//! # Message Posting Tests

use crate::handlers::test_utils::*;
use axum::http::StatusCode;
use serde_json::json;

async fn credits(app: &axum::Router, token: &str) -> i64 {
    let (_, body) = send(app, "GET", "/api/user/data", Some(token), None).await;
    body["user"]["credits"].as_i64().unwrap()
}

#[tokio::test]
async fn test_message_appends_and_costs_one_credit() {
    let app = new_app().await;
    let token = register(&app, "Alice", "alice@example.com").await;
    let chat_id = create_chat(&app, &token).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/chat/message",
        Some(&token),
        Some(json!({ "chatId": chat_id, "content": "How do I bake bread?" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["chat"]["messages"][0]["role"], "user");
    assert_eq!(body["chat"]["messages"][0]["content"], "How do I bake bread?");
    assert_eq!(body["chat"]["messages"][0]["isImage"], false);
    assert_eq!(credits(&app, &token).await, 19);
}

#[tokio::test]
async fn test_message_refused_when_credits_exhausted() {
    let pool = setup_test_db().await;
    let mut config = test_config();
    config.initial_credits = 1;
    let app = test_app(pool, config);

    let token = register(&app, "Alice", "alice@example.com").await;
    let chat_id = create_chat(&app, &token).await;
    let message = json!({ "chatId": chat_id, "content": "hi" });

    let (_, first) = send(&app, "POST", "/api/chat/message", Some(&token), Some(message.clone())).await;
    let (status, second) = send(&app, "POST", "/api/chat/message", Some(&token), Some(message)).await;

    assert_eq!(first["success"], true);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["success"], false);
    assert_eq!(second["message"], "You don't have enough credits to use this feature");
    assert_eq!(credits(&app, &token).await, 0);
}

#[tokio::test]
async fn test_message_to_foreign_chat_is_not_found_and_free() {
    let app = new_app().await;
    let alice = register(&app, "Alice", "alice@example.com").await;
    let bob = register(&app, "Bob", "bob@example.com").await;
    let chat_id = create_chat(&app, &alice).await;

    let (_, body) = send(
        &app,
        "POST",
        "/api/chat/message",
        Some(&bob),
        Some(json!({ "chatId": chat_id, "content": "mine now" })),
    )
    .await;

    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Chat not found");
    assert_eq!(credits(&app, &bob).await, 20);
}
