//! # Client Error Types
//!
//! ## Error Categories
//!
//! - **Unauthorized**: the server answered `401`; the session is over
//! - **Api**: the server answered `{"success": false, "message"}`
//! - **Network**: the request never produced a response
//! - **Decode**: the response was not the expected JSON
//! - **Storage**: the token could not be read, written or removed
//! - **Validation**: the operation was refused locally before any request
//!
//! ```rust
//! use client::ClientError;
//!
//! let err = ClientError::Api("Invalid email or password".to_string());
//! assert_eq!(err.to_string(), "Invalid email or password");
//! ```

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Missing, invalid or expired session token.
    #[error("Session expired, please log in again")]
    Unauthorized,

    /// Failure reported by the server; the message is shown as is.
    #[error("{0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Token storage error: {0}")]
    Storage(String),

    #[error("{0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Storage(err.to_string())
    }
}
