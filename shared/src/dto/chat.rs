//! # Chat DTOs
//!
//! - `GET /api/chat/get` - [`ChatListResponse`]
//! - `POST /api/chat/create` - [`ChatResponse`]
//! - `POST /api/chat/delete` - [`DeleteChatRequest`] -> [`crate::dto::StatusResponse`]
//! - `POST /api/chat/message` - [`AppendMessageRequest`] -> [`ChatResponse`]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::{truncate_chars, CHAT_TITLE_MAX_CHARS};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// One message of a chat. `content` is an image URL when `is_image` is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MessageInfo {
    pub role: Role,
    pub content: String,
    #[serde(default)]
    pub is_image: bool,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatInfo {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub messages: Vec<MessageInfo>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ChatInfo {
    /// Sidebar title: the first message's opening characters, or the chat name.
    pub fn title(&self) -> &str {
        match self.messages.first() {
            Some(first) => truncate_chars(&first.content, CHAT_TITLE_MAX_CHARS),
            None => &self.name,
        }
    }

    /// Case-insensitive sidebar search over the first message, or the name when
    /// the chat is empty.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        let haystack = match self.messages.first() {
            Some(first) => &first.content,
            None => &self.name,
        };
        haystack.to_lowercase().contains(&term)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatListResponse {
    pub success: bool,
    #[serde(default)]
    pub chats: Vec<ChatInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ChatListResponse {
    pub fn ok(chats: Vec<ChatInfo>) -> Self {
        Self {
            success: true,
            chats,
            message: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat: Option<ChatInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ChatResponse {
    pub fn ok(chat: ChatInfo) -> Self {
        Self {
            success: true,
            chat: Some(chat),
            message: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteChatRequest {
    pub chat_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppendMessageRequest {
    pub chat_id: String,
    pub content: String,
    #[serde(default)]
    pub is_image: bool,
}
