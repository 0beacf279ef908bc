//! # Chat Repository
//!
//! Every query is scoped by the owning user id. A chat that does not exist and
//! a chat owned by someone else are indistinguishable to the caller: both fail
//! with [`AppError::NotFoundOrForbidden`] and [`CHAT_NOT_FOUND_MESSAGE`].

use std::collections::HashMap;

use shared::dto::Role;
use sqlx::query_as;
use uuid::Uuid;

use super::models::{Chat, Message, MessageRow};
use super::DbPool;
use crate::error::{AppError, Result};

pub const DEFAULT_CHAT_NAME: &str = "New Chat";
pub const CHAT_NOT_FOUND_MESSAGE: &str = "Chat not found";

/// A message about to be appended; the timestamp is assigned on insert.
#[derive(Debug, Clone)]
pub struct MessageForCreate {
    pub role: Role,
    pub content: String,
    pub is_image: bool,
}

impl MessageForCreate {
    pub fn user_text(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            is_image: false,
        }
    }
}

fn chat_not_found() -> AppError {
    AppError::NotFoundOrForbidden(CHAT_NOT_FOUND_MESSAGE.to_string())
}

pub struct ChatRepository;

impl ChatRepository {
    /// Create an empty chat named [`DEFAULT_CHAT_NAME`] for `user_id`.
    pub async fn create(pool: &DbPool, user_id: &str) -> Result<Chat> {
        let id = Uuid::new_v4().to_string();
        let now = lib_utils::now_utc();

        let chat = query_as::<_, Chat>(
            r#"
            INSERT INTO chats (id, user_id, name, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, user_id, name, created_at, updated_at
            "#,
        )
        .bind(&id)
        .bind(user_id)
        .bind(DEFAULT_CHAT_NAME)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await?;

        tracing::debug!(chat_id = %chat.id, user_id, "Chat created");
        Ok(chat)
    }

    /// All chats of `user_id` with their messages, most recently updated first.
    pub async fn list(pool: &DbPool, user_id: &str) -> Result<Vec<Chat>> {
        let mut chats = query_as::<_, Chat>(
            r#"
            SELECT id, user_id, name, created_at, updated_at FROM chats
            WHERE user_id = ?
            ORDER BY updated_at DESC, rowid DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        let rows = query_as::<_, MessageRow>(
            r#"
            SELECT m.chat_id, m.role, m.content, m.is_image, m.timestamp
            FROM messages m JOIN chats c ON c.id = m.chat_id
            WHERE c.user_id = ?
            ORDER BY m.position ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        let mut by_chat: HashMap<String, Vec<Message>> = HashMap::new();
        for row in rows {
            let chat_id = row.chat_id.clone();
            by_chat.entry(chat_id).or_default().push(Message::try_from(row)?);
        }

        for chat in &mut chats {
            chat.messages = by_chat.remove(&chat.id).unwrap_or_default();
        }

        Ok(chats)
    }

    /// One chat of `user_id`, with its messages.
    pub async fn find_for_owner(pool: &DbPool, chat_id: &str, user_id: &str) -> Result<Chat> {
        let mut chat = query_as::<_, Chat>(
            "SELECT id, user_id, name, created_at, updated_at FROM chats WHERE id = ? AND user_id = ?",
        )
        .bind(chat_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(chat_not_found)?;

        let rows = query_as::<_, MessageRow>(
            r#"
            SELECT chat_id, role, content, is_image, timestamp
            FROM messages WHERE chat_id = ?
            ORDER BY position ASC
            "#,
        )
        .bind(chat_id)
        .fetch_all(pool)
        .await?;

        chat.messages = rows.into_iter().map(Message::try_from).collect::<Result<_>>()?;
        Ok(chat)
    }

    /// Delete a chat and its messages in one transaction.
    ///
    /// Nothing is removed unless `user_id` owns the chat.
    pub async fn delete(pool: &DbPool, chat_id: &str, user_id: &str) -> Result<()> {
        let mut tx = pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM chats WHERE id = ? AND user_id = ?")
            .bind(chat_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            return Err(chat_not_found());
        }

        sqlx::query("DELETE FROM messages WHERE chat_id = ?")
            .bind(chat_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(chat_id, user_id, "Chat deleted");
        Ok(())
    }

    /// Append a message at the end of the chat and bump its `updated_at`.
    pub async fn append_message(
        pool: &DbPool,
        chat_id: &str,
        user_id: &str,
        message: MessageForCreate,
    ) -> Result<Chat> {
        let now = lib_utils::now_utc();
        let mut tx = pool.begin().await?;

        let touched = sqlx::query("UPDATE chats SET updated_at = ? WHERE id = ? AND user_id = ?")
            .bind(now)
            .bind(chat_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if touched == 0 {
            return Err(chat_not_found());
        }

        sqlx::query(
            "INSERT INTO messages (chat_id, role, content, is_image, timestamp) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(chat_id)
        .bind(message.role.as_str())
        .bind(&message.content)
        .bind(message.is_image)
        .bind(lib_utils::to_millis(now))
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Self::find_for_owner(pool, chat_id, user_id).await
    }
}
