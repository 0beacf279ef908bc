use chrono::{DateTime, Utc};
use shared::dto::{ChatInfo, MessageInfo, Role, UserInfo};
use sqlx::FromRow;

use crate::error::AppError;

/// User entity representing a complete user record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub credits: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data structure for creating a new user.
///
/// The email must already be normalized and the password hashed.
#[derive(Debug, Clone)]
pub struct UserForCreate {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl UserForCreate {
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            name,
            email,
            password_hash,
        }
    }
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            credits: user.credits,
            created_at: user.created_at,
        }
    }
}

/// Chat entity. `messages` is filled by the repository after the row is read.
#[derive(Debug, Clone, FromRow)]
pub struct Chat {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sqlx(skip)]
    pub messages: Vec<Message>,
}

impl From<Chat> for ChatInfo {
    fn from(chat: Chat) -> Self {
        Self {
            id: chat.id,
            user_id: chat.user_id,
            name: chat.name,
            messages: chat.messages.into_iter().map(MessageInfo::from).collect(),
            created_at: chat.created_at,
            updated_at: chat.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub is_image: bool,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl From<Message> for MessageInfo {
    fn from(msg: Message) -> Self {
        Self {
            role: msg.role,
            content: msg.content,
            is_image: msg.is_image,
            timestamp: msg.timestamp,
        }
    }
}

/// Raw `messages` row; `role` is stored as text.
#[derive(Debug, FromRow)]
pub(crate) struct MessageRow {
    pub chat_id: String,
    pub role: String,
    pub content: String,
    pub is_image: bool,
    pub timestamp: i64,
}

impl TryFrom<MessageRow> for Message {
    type Error = AppError;

    fn try_from(row: MessageRow) -> Result<Self, Self::Error> {
        Ok(Self {
            role: row.role.parse().map_err(AppError::Database)?,
            content: row.content,
            is_image: row.is_image,
            timestamp: row.timestamp,
        })
    }
}
