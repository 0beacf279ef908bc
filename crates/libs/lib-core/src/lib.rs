//! # Core Library
//!
//! Configuration, the application error type, and the persistence layer
//! (credential store and chat repository).

pub mod config;
pub mod error;
pub mod model;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
pub use model::store::{create_memory_pool, create_pool, DbPool};
