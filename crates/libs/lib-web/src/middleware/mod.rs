//! # Middleware
//!
//! Axum middleware for authentication, request stamping, logging and response
//! mapping.
//!
//! ## Modules
//!
//! - **[`mw_auth`]**: bearer token authentication
//! - **[`mw_req_stamp`]**: request ID and timestamp stamping
//! - **[`mw_logging`]**: request/response logging with redaction
//! - **[`mw_res_map`]**: JSON bodies for bare error responses

// region: --- Modules
pub mod mw_auth;
pub mod mw_logging;
pub mod mw_req_stamp;
pub mod mw_res_map;
// endregion: --- Modules

// region: --- Re-exports
pub use mw_auth::{require_auth, CurrentUser};
pub use mw_logging::log_requests;
pub use mw_req_stamp::{stamp_req, RequestStamp};
pub use mw_res_map::map_res;
// endregion: --- Re-exports
