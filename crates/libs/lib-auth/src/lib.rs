//! # Authentication Library
//!
//! Password hashing and signed session tokens.
//!
//! - [`pwd`]: Argon2 hashing with per-password random salt; verification is the
//!   Argon2 verifier, which compares in constant time.
//! - [`token`]: stateless HS256 tokens carrying the user id, valid for
//!   [`TOKEN_TTL_DAYS`] days.

pub mod pwd;
pub mod token;

// Re-export commonly used types
pub use pwd::{dummy_verify, hash_password, verify_password, PwdError, MIN_PASSWORD_LEN};
pub use token::{issue_token, issue_token_at, verify_token, Claims, TokenError, TOKEN_TTL_DAYS};
