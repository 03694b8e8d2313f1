//! Time helpers
//!
//! Timestamps are `i64` Unix millis everywhere.

/// Current time in Unix millis
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
