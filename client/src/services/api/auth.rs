//! # Authentication Endpoints
//!
//! Register and login; both answer with a session token.

use shared::dto::{LoginRequest, RegisterRequest, TokenResponse};

use super::client::{rejected, ApiClient};
use crate::core::Result;

/// Log in with email and password.
#[tracing::instrument(skip_all, fields(email = %req.email))]
pub async fn login(client: &ApiClient, req: &LoginRequest) -> Result<String> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let response = client
        .client
        .post(client.url("/api/user/login"))
        .json(req)
        .send()
        .await?;

    let body: TokenResponse = ApiClient::read_json(response).await?;
    let duration = start.elapsed();

    match body.token {
        Some(token) if body.success => {
            tracing::info!(duration_ms = duration.as_millis(), "Login successful");
            Ok(token)
        }
        _ => {
            tracing::warn!(duration_ms = duration.as_millis(), "Login failed");
            Err(rejected(body.message))
        }
    }
}

/// Register a new user.
#[tracing::instrument(skip_all, fields(email = %req.email))]
pub async fn register(client: &ApiClient, req: &RegisterRequest) -> Result<String> {
    let response = client
        .client
        .post(client.url("/api/user/register"))
        .json(req)
        .send()
        .await?;

    let body: TokenResponse = ApiClient::read_json(response).await?;

    match body.token {
        Some(token) if body.success => Ok(token),
        _ => Err(rejected(body.message)),
    }
}
