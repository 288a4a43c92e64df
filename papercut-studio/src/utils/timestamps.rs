//! Timestamp utilities.

use chrono::{DateTime, Utc};

/// A UTC timestamp.
pub type Timestamp = DateTime<Utc>;

/// Returns the current UTC time.
#[must_use]
pub fn now_utc() -> Timestamp {
    Utc::now()
}

/// Returns the current UTC time as an ISO 8601 formatted string.
#[must_use]
pub fn iso_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f+00:00").to_string()
}

/// Returns the current Unix time in milliseconds.
///
/// Used as the distinguishing token in download filenames so repeated
/// downloads in one session never collide.
#[must_use]
pub fn unix_millis() -> i64 {
    Utc::now().timestamp_millis()
}
