//! # Chat Endpoints

use serde_json::json;
use shared::dto::{
    AppendMessageRequest, ChatInfo, ChatListResponse, ChatResponse, DeleteChatRequest, StatusResponse,
};

use super::client::{rejected, ApiClient};
use crate::core::Result;

/// `GET /api/chat/get`
pub async fn get_chats(client: &ApiClient, token: &str) -> Result<Vec<ChatInfo>> {
    let request = client.client.get(client.url("/api/chat/get"));
    let response = ApiClient::authed(request, token).send().await?;

    let body: ChatListResponse = ApiClient::read_json(response).await?;
    if !body.success {
        return Err(rejected(body.message));
    }

    tracing::debug!(count = body.chats.len(), "Fetched chats");
    Ok(body.chats)
}

/// `POST /api/chat/create`
pub async fn create_chat(client: &ApiClient, token: &str) -> Result<ChatInfo> {
    let request = client.client.post(client.url("/api/chat/create")).json(&json!({}));
    let response = ApiClient::authed(request, token).send().await?;

    let body: ChatResponse = ApiClient::read_json(response).await?;
    match body.chat {
        Some(chat) if body.success => Ok(chat),
        _ => Err(rejected(body.message)),
    }
}

/// `POST /api/chat/delete`
pub async fn delete_chat(client: &ApiClient, token: &str, chat_id: &str) -> Result<String> {
    let payload = DeleteChatRequest {
        chat_id: chat_id.to_string(),
    };
    let request = client.client.post(client.url("/api/chat/delete")).json(&payload);
    let response = ApiClient::authed(request, token).send().await?;

    let body: StatusResponse = ApiClient::read_json(response).await?;
    if !body.success {
        return Err(rejected(body.message));
    }

    Ok(body.message.unwrap_or_default())
}

/// `POST /api/chat/message`
pub async fn send_message(client: &ApiClient, token: &str, chat_id: &str, content: &str) -> Result<ChatInfo> {
    let payload = AppendMessageRequest {
        chat_id: chat_id.to_string(),
        content: content.to_string(),
        is_image: false,
    };
    let request = client.client.post(client.url("/api/chat/message")).json(&payload);
    let response = ApiClient::authed(request, token).send().await?;

    let body: ChatResponse = ApiClient::read_json(response).await?;
    match body.chat {
        Some(chat) if body.success => Ok(chat),
        _ => Err(rejected(body.message)),
    }
}
