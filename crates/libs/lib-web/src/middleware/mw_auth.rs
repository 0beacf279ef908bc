//! # Authentication Middleware
//!
//! Validates the `Authorization: Bearer <token>` header and injects the
//! authenticated [`CurrentUser`] into the request extensions.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use lib_web::middleware::require_auth;
//!
//! let app = Router::new()
//!     .route("/api/chat/get", get(get_chats))
//!     .route_layer(from_fn_with_state(state.clone(), require_auth))
//!     .with_state(state);
//! ```
//!
//! Handlers then extract the identity with `Extension<CurrentUser>`:
//!
//! ```rust,ignore
//! async fn get_chats(Extension(user): Extension<CurrentUser>) -> String {
//!     format!("Hello, user {}!", user.user_id)
//! }
//! ```

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use lib_auth::verify_token;
use lib_core::{AppError, Config};
use tracing::{debug, warn};

/// Identity of the caller, taken only from the verified token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: String,
}

/// Authentication middleware.
///
/// # Behavior
///
/// - **Valid token**: continues with [`CurrentUser`] in extensions
/// - **Missing/invalid/expired token**: `401 Unauthorized` with
///   `{"success": false, "message": ...}`
pub async fn require_auth(
    State(config): State<Config>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            warn!("[AUTH] Missing or malformed Authorization header");
            AppError::Unauthorized("Not authorized, no token".to_string())
        })?;

    let claims = verify_token(token, &config.jwt_secret).map_err(|e| {
        warn!("[AUTH] Token rejected: {}", e);
        AppError::from(e)
    })?;

    debug!("[AUTH] Authenticated user: {}", claims.sub);

    req.extensions_mut().insert(CurrentUser { user_id: claims.sub });

    Ok(next.run(req).await)
}
