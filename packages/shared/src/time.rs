//! Time utilities shared by the server and the client.
//!
//! Timestamps are Unix milliseconds in UTC, matching the wire format carried
//! by recipe events.

use chrono::{DateTime, Utc};

/// Get the current Unix timestamp in UTC (milliseconds).
pub fn current_timestamp_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert a Unix timestamp (milliseconds) to an RFC 3339 string.
///
/// Out-of-range timestamps render as an empty string rather than panicking;
/// the value is only used for display.
pub fn timestamp_to_rfc3339(timestamp_millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp_millis)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default()
}
