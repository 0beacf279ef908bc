//! # Time Utilities

use chrono::{DateTime, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Milliseconds since the Unix epoch, the unit message timestamps travel in.
pub fn to_millis(time: DateTime<Utc>) -> i64 {
    time.timestamp_millis()
}
