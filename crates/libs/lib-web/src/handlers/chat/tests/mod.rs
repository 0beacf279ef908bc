//! # Chat Handler Tests
//!
//! Chat CRUD, ownership isolation and message posting.

mod crud;
mod message;
mod ownership;
