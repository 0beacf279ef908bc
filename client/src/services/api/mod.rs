//! # Backend API Client Module
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports
//! ├── client.rs   - ApiClient, token attachment and response handling
//! ├── auth.rs     - register, login
//! ├── user.rs     - current user
//! └── chat.rs     - chat list, create, delete, message
//! ```

pub mod auth;
pub mod chat;
pub mod client;
pub mod user;

pub use client::{ApiClient, DEFAULT_SERVER_URL};

#[cfg(test)]
mod tests;
