//! # Request Extractors
//!
//! [`ApiJson`] replaces `axum::Json` for request bodies so a missing field,
//! bad syntax or wrong content type answers with the usual
//! `{"success": false, "message": ...}` envelope instead of axum's plain-text
//! 4xx rejection.

use axum::extract::{rejection::JsonRejection, FromRequest, Request};
use axum::Json;
use lib_core::AppError;

/// JSON request body whose rejection is an [`AppError`].
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
