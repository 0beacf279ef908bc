//! # Services
//!
//! Operations that span more than one repository.
//!
//! - **[`chat`]**: posting a message (ownership check, credit charge, append)

pub mod chat;
