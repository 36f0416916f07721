//! Display formatting shared by every rendering surface.
//!
//! All timestamps render in UTC with fixed patterns so that the same feed
//! produces the same text on every host. Numeric formatting is chosen by the
//! caller per field; nothing here rounds data that is stored elsewhere.

use chrono::{DateTime, Utc};

/// Formats a timestamp as a 24-hour wall-clock time, `HH:MM:SS`.
pub fn time_of_day(timestamp: DateTime<Utc>) -> String {
  timestamp.format("%H:%M:%S").to_string()
}

/// Formats a timestamp as an absolute date and time, `YYYY-MM-DD HH:MM:SS`.
pub fn date_time(timestamp: DateTime<Utc>) -> String {
  timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Formats a value with exactly one fractional digit.
pub fn one_decimal(value: f64) -> String {
  format!("{value:.1}")
}

/// Formats a value with Rust's default float rendering, which drops the
/// fractional part entirely for whole numbers.
pub fn raw(value: f64) -> String {
  format!("{value}")
}
