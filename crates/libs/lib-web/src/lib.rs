//! # Web Library
//!
//! HTTP handlers, middleware, services and server setup for the chat API.

pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod services;

pub use extract::ApiJson;
pub use server::{create_router, start_server, AppState, ServerConfig};
