//! # Response Mapping Middleware
//!
//! Every error the API produces itself is already `{"success": false, "message"}`.
//! Rejections raised outside the handlers (unparseable JSON, wrong content type,
//! unknown routes) come back as plain text; this middleware rewraps those
//! bodies into the same shape, keeping the status code.

use axum::{
    extract::Request,
    http::header::{CONTENT_LENGTH, CONTENT_TYPE},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use shared::dto::StatusResponse;
use tracing::error;

/// Upper bound on a rejection body worth rewrapping.
const MAX_REJECTION_BODY: usize = 16 * 1024;

fn is_json(res: &Response) -> bool {
    res.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}

/// Response mapping middleware.
pub async fn map_res(req: Request, next: Next) -> Response {
    let res = next.run(req).await;
    let status = res.status();

    if status.is_server_error() {
        error!("[RESPONSE] Server error: {}", status);
    }

    if status.is_success() || status.is_redirection() || is_json(&res) {
        return res;
    }

    let (mut parts, body) = res.into_parts();
    let message = match axum::body::to_bytes(body, MAX_REJECTION_BODY).await {
        Ok(bytes) if !bytes.is_empty() => String::from_utf8_lossy(&bytes).into_owned(),
        _ => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
    };

    let mapped = Json(StatusResponse::failure(message)).into_response();
    let (mapped_parts, mapped_body) = mapped.into_parts();

    parts.headers.remove(CONTENT_LENGTH);
    if let Some(content_type) = mapped_parts.headers.get(CONTENT_TYPE) {
        parts.headers.insert(CONTENT_TYPE, content_type.clone());
    }

    Response::from_parts(parts, mapped_body)
}
