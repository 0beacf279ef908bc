//! # User Handler Tests
//!
//! Registration, login and `/api/user/data`.

mod register;
