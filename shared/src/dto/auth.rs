//! # Authentication DTOs
//!
//! - `POST /api/user/register` - [`RegisterRequest`] -> [`TokenResponse`]
//! - `POST /api/user/login` - [`LoginRequest`] -> [`TokenResponse`]
//! - `GET /api/user/data` - [`UserDataResponse`]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registration request.
///
/// Server-side rules: non-empty name, well-formed email not already
/// registered, password of at least 8 characters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Answer to register and login: `token` on success, `message` on failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TokenResponse {
    pub fn ok(token: String) -> Self {
        Self {
            success: true,
            token: Some(token),
            message: None,
        }
    }
}

/// Public user information. The password hash never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub credits: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDataResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl UserDataResponse {
    pub fn ok(user: UserInfo) -> Self {
        Self {
            success: true,
            user: Some(user),
            message: None,
        }
    }
}
