//! # HTTP Request Handlers
//!
//! Axum handlers organized by feature domain. Handlers validate the request at
//! the boundary and delegate to the repositories in `lib_core` or to
//! [`crate::services`].
//!
//! ## Handler Modules
//!
//! - **[`user`]**: registration, login and the current user
//!   - `POST /api/user/register`
//!   - `POST /api/user/login`
//!   - `GET /api/user/data` (bearer)
//!
//! - **[`chat`]**: the caller's chats (all bearer)
//!   - `GET /api/chat/get`
//!   - `POST /api/chat/create`
//!   - `POST /api/chat/delete`
//!   - `POST /api/chat/message`
//!
//! ## Authentication
//!
//! Protected handlers extract `Extension<CurrentUser>`, inserted by
//! [`require_auth`](crate::middleware::require_auth). The user id is never read
//! from the request body.
//!
//! ## Error Handling
//!
//! Handlers return `Result<Json<T>, AppError>`; see [`lib_core::error`] for how
//! errors become `{"success": false, "message": ...}`.

pub mod chat;
pub mod user;

#[cfg(test)]
pub(crate) mod test_utils;
