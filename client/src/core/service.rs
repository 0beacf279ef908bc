//! # Service Traits
//!
//! [`ApiService`] is the seam between the session manager and the network, so
//! the manager can be driven by a fake in tests.

use async_trait::async_trait;
use shared::dto::{ChatInfo, LoginRequest, RegisterRequest, UserInfo};

use super::error::Result;

/// Backend API operations.
///
/// Calls that take a `token` send it as a bearer credential and fail with
/// [`ClientError::Unauthorized`](super::ClientError::Unauthorized) on `401`.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Register and return the new session token.
    async fn register(&self, req: &RegisterRequest) -> Result<String>;

    /// Log in and return a session token.
    async fn login(&self, req: &LoginRequest) -> Result<String>;

    /// The user the token belongs to.
    async fn user_data(&self, token: &str) -> Result<UserInfo>;

    /// The user's chats, most recently updated first.
    async fn get_chats(&self, token: &str) -> Result<Vec<ChatInfo>>;

    async fn create_chat(&self, token: &str) -> Result<ChatInfo>;

    /// Delete a chat and return the server's confirmation message.
    async fn delete_chat(&self, token: &str, chat_id: &str) -> Result<String>;

    /// Post a text message and return the updated chat.
    async fn send_message(&self, token: &str, chat_id: &str, content: &str) -> Result<ChatInfo>;
}
