//! # Chat Service
//!
//! Posting a message costs credits: [`TEXT_MESSAGE_COST`] for text,
//! [`IMAGE_MESSAGE_COST`] for an image. Ownership is checked before anything
//! is spent, and the charge is refunded if the append itself fails.

use lib_core::model::store::chat_repository::MessageForCreate;
use lib_core::model::store::models::Chat;
use lib_core::model::store::{ChatRepository, UserRepository};
use lib_core::{AppError, DbPool, Result};
use shared::dto::{AppendMessageRequest, Role};
use tracing::{debug, warn};

pub const TEXT_MESSAGE_COST: i64 = 1;
pub const IMAGE_MESSAGE_COST: i64 = 2;

pub fn message_cost(is_image: bool) -> i64 {
    if is_image {
        IMAGE_MESSAGE_COST
    } else {
        TEXT_MESSAGE_COST
    }
}

/// Append a user message to one of `user_id`'s chats.
pub async fn post_message(pool: &DbPool, user_id: &str, req: AppendMessageRequest) -> Result<Chat> {
    let chat_id = req.chat_id.trim();
    if chat_id.is_empty() {
        return Err(AppError::InvalidInput("chatId is required".to_string()));
    }
    if req.content.trim().is_empty() {
        return Err(AppError::InvalidInput("Message cannot be empty".to_string()));
    }

    ChatRepository::find_for_owner(pool, chat_id, user_id).await?;

    let cost = message_cost(req.is_image);
    let remaining = UserRepository::spend_credits(pool, user_id, cost).await?;
    debug!(cost, remaining, "[CHAT] Credits spent");

    let message = MessageForCreate {
        role: Role::User,
        content: req.content,
        is_image: req.is_image,
    };

    match ChatRepository::append_message(pool, chat_id, user_id, message).await {
        Ok(chat) => Ok(chat),
        Err(err) => {
            warn!("[CHAT] Append failed, refunding {} credits: {}", cost, err);
            if let Err(refund_err) = UserRepository::add_credits(pool, user_id, cost).await {
                warn!("[CHAT] Refund failed: {}", refund_err);
            }
            Err(err)
        }
    }
}
