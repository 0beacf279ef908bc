//! # QuickGPT Client - Library Root
//!
//! Client-side session management for the QuickGPT chat API. The `quickgpt`
//! binary (`main.rs`) is a thin command-line front-end over this library.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │  session::SessionManager                               │
//! │    Session (phase, token, user, chats, selection,      │
//! │             view, notices)                             │
//! ├───────────────────────────┬────────────────────────────┤
//! │  core::ApiService         │  session::TokenStore       │
//! │  (services::api::ApiClient│  (FileTokenStore,          │
//! │   over reqwest)           │   MemoryTokenStore)        │
//! └───────────────────────────┴────────────────────────────┘
//!          │ HTTP + Bearer token
//!          ▼
//!   Backend API (axum)
//! ```
//!
//! Every request that carries the token goes through [`services::api::ApiClient`];
//! a `401` surfaces as [`ClientError::Unauthorized`] and the session manager
//! answers it by logging out.
//!
//! ## Module Structure
//!
//! - [`core`]: error type and the [`ApiService`] trait
//! - [`services`]: the HTTP implementation of [`ApiService`]
//! - [`session`]: session state, token storage and the manager

pub mod core;
pub mod services;
pub mod session;

pub use crate::core::{ApiService, ClientError, Result};
pub use services::api::ApiClient;
pub use session::{FileTokenStore, MemoryTokenStore, Session, SessionManager, TokenStore};
