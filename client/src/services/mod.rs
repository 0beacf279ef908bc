//! # Services
//!
//! - [`api`]: HTTP client for the backend API

pub mod api;
