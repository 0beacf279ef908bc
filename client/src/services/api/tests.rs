//! API client tests against a mock HTTP server.

use serde_json::json;
use shared::dto::LoginRequest;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::ApiClient;
use crate::core::{ApiService, ClientError};

fn chat_json(id: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "userId": "u1",
        "name": "New Chat",
        "messages": [],
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    })
}

#[tokio::test]
async fn test_login_returns_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/user/login"))
        .and(body_json(json!({ "email": "alice@example.com", "password": "Password123!" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "token": "tok" })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let token = client
        .login(&LoginRequest {
            email: "alice@example.com".to_string(),
            password: "Password123!".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(token, "tok");
}

#[tokio::test]
async fn test_failure_body_becomes_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/user/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": false, "message": "Invalid email or password" })),
        )
        .mount(&server)
        .await;

    let err = ApiClient::new(server.uri())
        .login(&LoginRequest {
            email: "alice@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    match err {
        ClientError::Api(message) => assert_eq!(message, "Invalid email or password"),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_token_attached_as_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/chat/get"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "chats": [chat_json("c1")] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let chats = ApiClient::new(server.uri()).get_chats("tok").await.unwrap();

    assert_eq!(chats.len(), 1);
    assert_eq!(chats[0].id, "c1");
}

#[tokio::test]
async fn test_401_is_unauthorized_on_any_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "success": false, "message": "Not authorized, token failed" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());

    assert!(matches!(client.user_data("stale").await, Err(ClientError::Unauthorized)));
    assert!(matches!(client.get_chats("stale").await, Err(ClientError::Unauthorized)));
    assert!(matches!(client.create_chat("stale").await, Err(ClientError::Unauthorized)));
    assert!(matches!(client.delete_chat("stale", "c1").await, Err(ClientError::Unauthorized)));
}

#[tokio::test]
async fn test_delete_sends_chat_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat/delete"))
        .and(body_json(json!({ "chatId": "c1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "message": "Chat deleted" })))
        .mount(&server)
        .await;

    let message = ApiClient::new(server.uri()).delete_chat("tok", "c1").await.unwrap();

    assert_eq!(message, "Chat deleted");
}

#[tokio::test]
async fn test_non_json_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat/create"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = ApiClient::new(server.uri()).create_chat("tok").await.unwrap_err();

    assert!(matches!(err, ClientError::Api(ref m) if m.contains("502")), "{err:?}");
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let err = ApiClient::new("http://127.0.0.1:9").get_chats("tok").await.unwrap_err();

    assert!(matches!(err, ClientError::Network(_)), "{err:?}");
}
