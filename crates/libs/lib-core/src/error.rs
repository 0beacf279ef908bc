//! # Centralized Error Handling
//!
//! [`AppError`] is the single error type of the server crates.
//!
//! ## Response Contract
//!
//! The browser client inspects the `success` flag rather than the status code,
//! so every error answers `200 OK` with `{"success": false, "message": ...}`
//! except [`AppError::Unauthorized`], which answers `401` with the same body and
//! makes the client drop its token.
//!
//! | Variant | Status | Message |
//! |---|---|---|
//! | [`InvalidInput`](AppError::InvalidInput) | 200 | the validation message |
//! | [`Unauthorized`](AppError::Unauthorized) | 401 | the reason |
//! | [`InvalidCredentials`](AppError::InvalidCredentials) | 200 | "Invalid email or password" |
//! | [`Conflict`](AppError::Conflict) | 200 | the conflict |
//! | [`NotFoundOrForbidden`](AppError::NotFoundOrForbidden) | 200 | same text for absent and not-owned |
//! | [`InsufficientCredits`](AppError::InsufficientCredits) | 200 | fixed text |
//! | [`Database`](AppError::Database) / [`Internal`](AppError::Internal) / [`Config`](AppError::Config) | 200 | generic text, details only logged |
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn parse_name(name: &str) -> Result<&str> {
//!     if name.trim().is_empty() {
//!         return Err(AppError::InvalidInput("Name cannot be empty".to_string()));
//!     }
//!     Ok(name.trim())
//! }
//! ```

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lib_auth::{PwdError, TokenError};
use shared::dto::StatusResponse;
use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Message shown for every failure whose details must stay server-side.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong, please try again";

/// Message shared by both failing login branches.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

pub const INSUFFICIENT_CREDITS_MESSAGE: &str = "You don't have enough credits to use this feature";

#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed or rejected request input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Missing, invalid or expired bearer token.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Unknown email or wrong password; deliberately indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Uniqueness violation (duplicate email).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The record does not exist or belongs to someone else.
    #[error("Not found or forbidden: {0}")]
    NotFoundOrForbidden(String),

    #[error("Insufficient credits")]
    InsufficientCredits,

    /// Persistence-layer failure.
    #[error("Database error: {0}")]
    Database(String),

    /// Internal server error (unexpected failures).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::OK,
        }
    }

    /// Get the message sent to the client.
    ///
    /// Server-side failures collapse to [`GENERIC_FAILURE_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg)
            | AppError::Unauthorized(msg)
            | AppError::Conflict(msg)
            | AppError::NotFoundOrForbidden(msg) => msg.clone(),
            AppError::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE.to_string(),
            AppError::InsufficientCredits => INSUFFICIENT_CREDITS_MESSAGE.to_string(),
            AppError::Config(_) | AppError::Database(_) | AppError::Internal(_) => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }

    fn is_server_fault(&self) -> bool {
        matches!(
            self,
            AppError::Config(_) | AppError::Database(_) | AppError::Internal(_)
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_server_fault() {
            tracing::error!("Server error: {}", self);
        } else {
            tracing::debug!("Client error: {}", self);
        }

        let body = Json(StatusResponse::failure(self.user_message()));
        (self.status_code(), body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFoundOrForbidden("Record not found".to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Record already exists".to_string())
            }
            sqlx::Error::Database(db_err) => AppError::Database(db_err.message().to_string()),
            _ => AppError::Database(err.to_string()),
        }
    }
}

impl From<PwdError> for AppError {
    fn from(err: PwdError) -> Self {
        match err {
            PwdError::TooShort => AppError::InvalidInput(err.to_string()),
            PwdError::Hash(_) | PwdError::MalformedHash(_) => AppError::Internal(err.to_string()),
        }
    }
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Invalid => AppError::Unauthorized("Not authorized, token failed".to_string()),
            TokenError::Expired => AppError::Unauthorized("Not authorized, token expired".to_string()),
            TokenError::Sign(msg) => AppError::Internal(msg),
        }
    }
}

/// Body rejections keep the usual `200` failure envelope and never echo
/// deserializer internals back to the client.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        let msg = match rejection {
            JsonRejection::MissingJsonContentType(_) => "Expected a JSON request body",
            JsonRejection::JsonSyntaxError(_) => "Malformed JSON body",
            _ => "Invalid request body",
        };
        AppError::InvalidInput(msg.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("Malformed JSON: {}", err))
    }
}
