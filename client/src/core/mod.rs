//! # Core Abstractions
//!
//! - **[`error`]**: client error type ([`ClientError`], [`Result`])
//! - **[`service`]**: the [`ApiService`] trait the session manager talks to
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use client::core::ApiService;
//!
//! // In production: the HTTP client
//! let api: Arc<dyn ApiService> = Arc::new(client::ApiClient::new("http://127.0.0.1:3000"));
//!
//! // In tests: an in-memory fake
//! let api: Arc<dyn ApiService> = Arc::new(FakeApi::default());
//! ```

pub mod error;
pub mod service;

pub use error::{ClientError, Result};
pub use service::ApiService;
