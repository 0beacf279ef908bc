//! # Shared Data Transfer Objects Library
//!
//! The JSON contract between the API server and its clients.
//!
//! ## Wire Format
//!
//! - Field names are **camelCase** on the wire (`userId`, `updatedAt`, `isImage`).
//! - Record ids serialize as `_id`, which is what the browser client reads.
//! - Every response carries `success`; failures carry `message` and nothing else.
//!
//! ```rust
//! use shared::dto::TokenResponse;
//!
//! let ok: TokenResponse = serde_json::from_str(r#"{"success":true,"token":"abc"}"#).unwrap();
//! assert_eq!(ok.token.as_deref(), Some("abc"));
//!
//! let failed: TokenResponse =
//!     serde_json::from_str(r#"{"success":false,"message":"Invalid email or password"}"#).unwrap();
//! assert!(!failed.success);
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
