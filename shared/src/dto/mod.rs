//! # Data Transfer Objects (DTOs)
//!
//! - [`auth`] - registration, login and user info
//! - [`chat`] - chats, messages and chat operations
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/user/login
//! Content-Type: application/json
//!
//! { "email": "alice@example.com", "password": "MyPassword123!" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//!
//! { "success": true, "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
//! ```
//!
//! A rejected request still answers `200 OK`, only an authentication failure
//! uses `401`:
//!
//! ```text
//! { "success": false, "message": "Invalid email or password" }
//! ```

pub mod auth;
pub mod chat;

pub use auth::*;
pub use chat::*;

use serde::{Deserialize, Serialize};

/// Bare `{success, message}` body: every failure, and successes that only
/// report a message (chat delete).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}
