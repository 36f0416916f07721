use crate::{format, ToPrettyString};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{error::Error, fmt};

/// A single timestamped sample of the vehicle's sensor suite.
///
/// Readings are produced by the vehicle in chronological order and never
/// modified after the fact; every consumer treats them as plain records.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TelemetryReading {
  /// The moment the sample was taken, in UTC.
  pub timestamp: DateTime<Utc>,

  /// Depth below the surface in meters. Never negative.
  pub depth_m: f64,

  /// Compass heading in degrees, in `[0, 360)`.
  pub heading_deg: f64,

  /// Speed over ground in knots. Never negative.
  pub speed_kn: f64,

  /// Remaining battery charge as a percentage, in `[0, 100]`.
  pub battery_pct: f64,

  /// External water temperature in degrees Celsius.
  pub temperature_c: f64,

  /// External water pressure in kilopascals. Never negative.
  pub pressure_kpa: f64,
}

impl TelemetryReading {
  /// Checks every numeric field against its allowed domain, returning the
  /// first violation found.
  ///
  /// Non-finite values are rejected everywhere, since a `NaN` anywhere in
  /// the pipeline poisons chart bounds and comparisons downstream.
  pub fn validate(&self) -> Result<(), ReadingError> {
    let checks = [
      (
        "depth_m",
        self.depth_m,
        self.depth_m.is_finite() && self.depth_m >= 0.0,
        "a finite value of at least 0",
      ),
      (
        "heading_deg",
        self.heading_deg,
        self.heading_deg.is_finite()
          && self.heading_deg >= 0.0
          && self.heading_deg < 360.0,
        "a finite value of at least 0 and less than 360",
      ),
      (
        "speed_kn",
        self.speed_kn,
        self.speed_kn.is_finite() && self.speed_kn >= 0.0,
        "a finite value of at least 0",
      ),
      (
        "battery_pct",
        self.battery_pct,
        self.battery_pct.is_finite()
          && self.battery_pct >= 0.0
          && self.battery_pct <= 100.0,
        "a finite value between 0 and 100",
      ),
      (
        "temperature_c",
        self.temperature_c,
        self.temperature_c.is_finite(),
        "a finite value",
      ),
      (
        "pressure_kpa",
        self.pressure_kpa,
        self.pressure_kpa.is_finite() && self.pressure_kpa >= 0.0,
        "a finite value of at least 0",
      ),
    ];

    for (field, value, ok, expected) in checks {
      if !ok {
        return Err(ReadingError {
          field,
          value,
          expected,
        });
      }
    }

    Ok(())
  }
}

impl fmt::Display for TelemetryReading {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}: depth {} m, heading {}°, speed {} kn, battery {}%",
      format::date_time(self.timestamp),
      format::raw(self.depth_m),
      format::raw(self.heading_deg),
      format::one_decimal(self.speed_kn),
      format::raw(self.battery_pct),
    )
  }
}

impl ToPrettyString for TelemetryReading {
  fn to_pretty_string(&self) -> String {
    format!(
      "\x1b[1m{}\x1b[0m  depth {} m, heading {}°, speed {} kn, battery {}%",
      format::date_time(self.timestamp),
      format::raw(self.depth_m),
      format::raw(self.heading_deg),
      format::one_decimal(self.speed_kn),
      format::raw(self.battery_pct),
    )
  }
}

/// A reading field that violates its allowed domain.
#[derive(Clone, Debug, PartialEq)]
pub struct ReadingError {
  /// Name of the offending field.
  pub field: &'static str,

  /// The value the field actually held.
  pub value: f64,

  /// Human-readable description of the allowed domain.
  pub expected: &'static str,
}

impl fmt::Display for ReadingError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "field '{}' holds {} but must be {}",
      self.field, self.value, self.expected
    )
  }
}

impl Error for ReadingError {}

#[cfg(test)]
mod tests {
  use super::*;

  fn reading() -> TelemetryReading {
    TelemetryReading {
      timestamp: DateTime::parse_from_rfc3339("2026-03-14T09:29:00Z")
        .expect("test timestamp should parse as RFC 3339")
        .with_timezone(&Utc),
      depth_m: 65.0,
      heading_deg: 207.0,
      speed_kn: 1.7,
      battery_pct: 87.0,
      temperature_c: 6.6,
      pressure_kpa: 755.2,
    }
  }

  #[test]
  fn validate_accepts_nominal_reading() {
    reading()
      .validate()
      .expect("a reading with every field in its domain should validate");
  }

  #[test]
  fn validate_rejects_negative_depth() {
    let mut bad = reading();
    bad.depth_m = -0.5;

    let error = bad
      .validate()
      .expect_err("a negative depth should fail validation");

    assert_eq!(error.field, "depth_m");
    assert_eq!(error.value, -0.5);
  }

  #[test]
  fn validate_rejects_heading_of_exactly_360() {
    let mut bad = reading();
    bad.heading_deg = 360.0;

    let error = bad
      .validate()
      .expect_err("a heading of 360 should fail validation, since the domain is half-open");

    assert_eq!(error.field, "heading_deg");
  }

  #[test]
  fn validate_rejects_battery_above_100() {
    let mut bad = reading();
    bad.battery_pct = 100.1;

    let error = bad
      .validate()
      .expect_err("a battery percentage above 100 should fail validation");

    assert_eq!(error.field, "battery_pct");
  }

  #[test]
  fn validate_rejects_non_finite_values() {
    let mut bad = reading();
    bad.temperature_c = f64::NAN;

    let error = bad
      .validate()
      .expect_err("a NaN temperature should fail validation");

    assert_eq!(error.field, "temperature_c");
  }

  #[test]
  fn reading_serializes_with_rfc3339_timestamp() {
    let json = serde_json::to_string(&reading())
      .expect("a telemetry reading should serialize to JSON");

    assert!(json.contains("\"2026-03-14T09:29:00Z\""));
    assert!(json.contains("\"depth_m\":65.0"));
  }

  #[test]
  fn reading_round_trips_through_json() {
    let original = reading();

    let json = serde_json::to_string(&original)
      .expect("a telemetry reading should serialize to JSON");
    let restored: TelemetryReading = serde_json::from_str(&json)
      .expect("a serialized telemetry reading should deserialize back");

    assert_eq!(restored, original);
  }

  #[test]
  fn display_shows_speed_to_one_decimal() {
    let text = reading().to_string();

    assert!(text.contains("speed 1.7 kn"));
    assert!(text.contains("depth 65 m"));
  }
}
