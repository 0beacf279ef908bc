use shared::dto::{UserDataResponse, UserInfo};

use super::client::{rejected, ApiClient};
use crate::core::Result;

/// `GET /api/user/data`
pub async fn user_data(client: &ApiClient, token: &str) -> Result<UserInfo> {
    let request = client.client.get(client.url("/api/user/data"));
    let response = ApiClient::authed(request, token).send().await?;

    let body: UserDataResponse = ApiClient::read_json(response).await?;
    match body.user {
        Some(user) if body.success => Ok(user),
        _ => Err(rejected(body.message)),
    }
}
