//! # Chat Handlers
//!
//! All routes here sit behind [`require_auth`](crate::middleware::require_auth);
//! the owner is always the token's user. A chat id that is unknown and one that
//! belongs to another user produce identical responses.

use axum::extract::{Extension, Json, State};
use lib_core::model::store::ChatRepository;
use lib_core::{AppError, DbPool, Result};
use shared::dto::{
    AppendMessageRequest, ChatInfo, ChatListResponse, ChatResponse, DeleteChatRequest, StatusResponse,
};
use tracing::{debug, info, instrument};

use crate::extract::ApiJson;
use crate::middleware::CurrentUser;
use crate::services;

pub const CHAT_DELETED_MESSAGE: &str = "Chat deleted";

/// `GET /api/chat/get` - the caller's chats, most recently updated first.
#[instrument(skip_all, fields(user_id = %current.user_id))]
pub async fn get_chats(
    State(pool): State<DbPool>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<ChatListResponse>> {
    let chats = ChatRepository::list(&pool, &current.user_id).await?;
    debug!(count = chats.len(), "[CHAT] Listed chats");

    Ok(Json(ChatListResponse::ok(
        chats.into_iter().map(ChatInfo::from).collect(),
    )))
}

/// `POST /api/chat/create` - a new empty chat. The body is ignored.
#[instrument(skip_all, fields(user_id = %current.user_id))]
pub async fn create_chat(
    State(pool): State<DbPool>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<ChatResponse>> {
    let chat = ChatRepository::create(&pool, &current.user_id).await?;
    info!(chat_id = %chat.id, "[CHAT] Created chat");

    Ok(Json(ChatResponse::ok(chat.into())))
}

/// `POST /api/chat/delete` - `{chatId}`.
#[instrument(skip_all, fields(user_id = %current.user_id, chat_id = %req.chat_id))]
pub async fn delete_chat(
    State(pool): State<DbPool>,
    Extension(current): Extension<CurrentUser>,
    ApiJson(req): ApiJson<DeleteChatRequest>,
) -> Result<Json<StatusResponse>> {
    let chat_id = req.chat_id.trim();
    if chat_id.is_empty() {
        return Err(AppError::InvalidInput("chatId is required".to_string()));
    }

    ChatRepository::delete(&pool, chat_id, &current.user_id).await?;
    info!("[CHAT] Deleted chat");

    Ok(Json(StatusResponse::ok(CHAT_DELETED_MESSAGE)))
}

/// `POST /api/chat/message` - append the caller's message, spending credits.
#[instrument(skip_all, fields(user_id = %current.user_id, chat_id = %req.chat_id, is_image = req.is_image))]
pub async fn append_message(
    State(pool): State<DbPool>,
    Extension(current): Extension<CurrentUser>,
    ApiJson(req): ApiJson<AppendMessageRequest>,
) -> Result<Json<ChatResponse>> {
    let chat = services::chat::post_message(&pool, &current.user_id, req).await?;

    Ok(Json(ChatResponse::ok(chat.into())))
}

#[cfg(test)]
mod tests;
