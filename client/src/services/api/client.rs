//! # API Client
//!
//! Main HTTP client for backend API communication.
//!
//! All authenticated requests are built with [`ApiClient::authed`], and every
//! response is read through [`ApiClient::read_json`], which turns a `401` into
//! [`ClientError::Unauthorized`] whatever the endpoint.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::dto::{ChatInfo, LoginRequest, RegisterRequest, StatusResponse, UserInfo};

use crate::core::{ApiService, ClientError, Result};

/// Server used when `QUICKGPT_SERVER_URL` is not set.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// HTTP client for communicating with the backend API server.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url` with a 10 second request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the session token as a bearer credential.
    pub(crate) fn authed(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.bearer_auth(token)
    }

    /// Read a JSON body, mapping `401` and non-JSON error statuses.
    pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("Server rejected the session token");
            return Err(ClientError::Unauthorized);
        }

        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<StatusResponse>(&bytes)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| format!("Request failed with status {}", status));
            tracing::warn!(status = status.as_u16(), %message, "Request failed");
            return Err(ClientError::Api(message));
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!(error = %e, "Response parse error");
            ClientError::Decode(e.to_string())
        })
    }
}

/// Error for a `{"success": false}` body.
pub(crate) fn rejected(message: Option<String>) -> ClientError {
    ClientError::Api(message.unwrap_or_else(|| "Request failed".to_string()))
}

#[async_trait]
impl ApiService for ApiClient {
    async fn register(&self, req: &RegisterRequest) -> Result<String> {
        super::auth::register(self, req).await
    }

    async fn login(&self, req: &LoginRequest) -> Result<String> {
        super::auth::login(self, req).await
    }

    async fn user_data(&self, token: &str) -> Result<UserInfo> {
        super::user::user_data(self, token).await
    }

    async fn get_chats(&self, token: &str) -> Result<Vec<ChatInfo>> {
        super::chat::get_chats(self, token).await
    }

    async fn create_chat(&self, token: &str) -> Result<ChatInfo> {
        super::chat::create_chat(self, token).await
    }

    async fn delete_chat(&self, token: &str, chat_id: &str) -> Result<String> {
        super::chat::delete_chat(self, token, chat_id).await
    }

    async fn send_message(&self, token: &str, chat_id: &str, content: &str) -> Result<ChatInfo> {
        super::chat::send_message(self, token, chat_id, content).await
    }
}
