//! The telemetry feed: an ordered, validated, immutable sequence of
//! readings, and the boundary that produces one from a feed document.
//!
//! Construction is the enforcement point for the data contract. Once a
//! `TelemetryFeed` exists, every reading is within its field domains and
//! timestamps strictly increase, so projections downstream never
//! re-validate.

use chrono::{DateTime, Duration, Utc};
use common::telemetry::{ReadingError, TelemetryReading};
use serde::Deserialize;
use std::{error::Error, fmt, fs, io, path::Path};

/// The built-in sample feed.
pub mod sample;

/// An ordered, validated, immutable sequence of telemetry readings.
///
/// Readings are stored oldest first; the most recent reading is always the
/// last element. The feed exposes no mutating operations, so a reference to
/// it can be shared freely across every projector for the life of a render.
#[derive(Clone, Debug, PartialEq)]
pub struct TelemetryFeed {
  readings: Vec<TelemetryReading>,
}

impl TelemetryFeed {
  /// Wraps a sequence of readings, enforcing the feed invariants.
  ///
  /// Every reading must pass field validation, and timestamps must strictly
  /// increase from one reading to the next. An empty sequence is a valid,
  /// empty feed.
  pub fn new(readings: Vec<TelemetryReading>) -> Result<Self, FeedError> {
    for (index, reading) in readings.iter().enumerate() {
      reading
        .validate()
        .map_err(|source| FeedError::Range { index, source })?;

      if index > 0 {
        let previous = readings[index - 1].timestamp;

        if reading.timestamp == previous {
          return Err(FeedError::DuplicateTimestamp { index });
        }

        if reading.timestamp < previous {
          return Err(FeedError::OutOfOrder { index });
        }
      }
    }

    Ok(TelemetryFeed { readings })
  }

  /// Parses a feed document: a JSON array of reading objects with RFC 3339
  /// timestamp strings.
  ///
  /// Fields beyond the known ones are ignored, so documents produced by
  /// newer vehicles still load.
  pub fn from_json(document: &str) -> Result<Self, FeedError> {
    let raw: Vec<RawReading> = serde_json::from_str(document)?;

    let mut readings = Vec::with_capacity(raw.len());

    for (index, record) in raw.into_iter().enumerate() {
      readings.push(record.into_reading(index)?);
    }

    TelemetryFeed::new(readings)
  }

  /// Reads and parses the feed document at `path`.
  pub fn from_json_file(path: &Path) -> Result<Self, FeedError> {
    let document = fs::read_to_string(path)?;

    TelemetryFeed::from_json(&document)
  }

  /// The readings in storage order, oldest first.
  pub fn readings(&self) -> &[TelemetryReading] {
    &self.readings
  }

  /// The most recent reading, if the feed holds any.
  pub fn latest(&self) -> Option<&TelemetryReading> {
    self.readings.last()
  }

  /// Returns the trailing time window of the feed: every reading taken at
  /// or after `minutes` before the newest reading.
  ///
  /// Ordering makes the window a suffix of storage order, so the result is
  /// a valid feed by construction. A window wider than the feed's span
  /// keeps every reading, and an empty feed windows to an empty feed.
  pub fn window(&self, minutes: u32) -> TelemetryFeed {
    let newest = match self.readings.last() {
      Some(reading) => reading.timestamp,
      None => return TelemetryFeed { readings: Vec::new() },
    };

    let cutoff = newest - Duration::minutes(i64::from(minutes));

    let start = self
      .readings
      .partition_point(|reading| reading.timestamp < cutoff);

    TelemetryFeed {
      readings: self.readings[start..].to_vec(),
    }
  }

  /// Number of readings in the feed.
  pub fn len(&self) -> usize {
    self.readings.len()
  }

  /// Whether the feed holds no readings at all.
  pub fn is_empty(&self) -> bool {
    self.readings.is_empty()
  }
}

/// One reading as it appears in a feed document, before validation.
///
/// Every field is optional so that an absent field can be reported by name
/// and index instead of surfacing as a generic deserialization failure.
#[derive(Deserialize)]
struct RawReading {
  timestamp: Option<String>,
  depth_m: Option<f64>,
  heading_deg: Option<f64>,
  speed_kn: Option<f64>,
  battery_pct: Option<f64>,
  temperature_c: Option<f64>,
  pressure_kpa: Option<f64>,
}

impl RawReading {
  /// Converts the raw record into a reading, reporting the first absent
  /// field or unparseable timestamp.
  fn into_reading(self, index: usize) -> Result<TelemetryReading, FeedError> {
    let field = |field: &'static str, value: Option<f64>| {
      value.ok_or(FeedError::MissingField { index, field })
    };

    let text = self.timestamp.ok_or(FeedError::MissingField {
      index,
      field: "timestamp",
    })?;

    let timestamp = match DateTime::parse_from_rfc3339(&text) {
      Ok(parsed) => parsed.with_timezone(&Utc),
      Err(source) => {
        return Err(FeedError::Timestamp {
          index,
          value: text,
          source,
        })
      }
    };

    Ok(TelemetryReading {
      timestamp,
      depth_m: field("depth_m", self.depth_m)?,
      heading_deg: field("heading_deg", self.heading_deg)?,
      speed_kn: field("speed_kn", self.speed_kn)?,
      battery_pct: field("battery_pct", self.battery_pct)?,
      temperature_c: field("temperature_c", self.temperature_c)?,
      pressure_kpa: field("pressure_kpa", self.pressure_kpa)?,
    })
  }
}

/// Any way a feed document can fail to become a usable telemetry feed.
///
/// Indices refer to the reading's position in document order, counting from
/// zero.
#[derive(Debug)]
pub enum FeedError {
  /// The document could not be read from disk.
  Io(io::Error),

  /// The document is not a JSON array of reading objects.
  Malformed(serde_json::Error),

  /// A reading is missing a required field.
  MissingField {
    /// Position of the offending reading.
    index: usize,

    /// Name of the absent field.
    field: &'static str,
  },

  /// A reading's timestamp is not a valid RFC 3339 datetime.
  Timestamp {
    /// Position of the offending reading.
    index: usize,

    /// The timestamp text as it appeared in the document.
    value: String,

    /// The underlying parse failure.
    source: chrono::ParseError,
  },

  /// A reading holds a field outside its allowed domain.
  Range {
    /// Position of the offending reading.
    index: usize,

    /// The field violation itself.
    source: ReadingError,
  },

  /// A reading's timestamp is earlier than its predecessor's.
  OutOfOrder {
    /// Position of the offending reading.
    index: usize,
  },

  /// A reading's timestamp repeats its predecessor's exactly.
  DuplicateTimestamp {
    /// Position of the offending reading.
    index: usize,
  },
}

impl fmt::Display for FeedError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Io(error) => write!(f, "failed to read feed document: {error}"),
      Self::Malformed(error) => {
        write!(f, "feed document is not a JSON array of readings: {error}")
      }
      Self::MissingField { index, field } => {
        write!(f, "reading {index} is missing required field '{field}'")
      }
      Self::Timestamp { index, value, .. } => {
        write!(
          f,
          "reading {index} has timestamp '{value}', which is not a valid \
           RFC 3339 datetime"
        )
      }
      Self::Range { index, source } => {
        write!(f, "reading {index} is out of range: {source}")
      }
      Self::OutOfOrder { index } => {
        write!(
          f,
          "reading {index} is timestamped earlier than the reading before it"
        )
      }
      Self::DuplicateTimestamp { index } => {
        write!(
          f,
          "reading {index} repeats the timestamp of the reading before it"
        )
      }
    }
  }
}

impl Error for FeedError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      Self::Io(error) => Some(error),
      Self::Malformed(error) => Some(error),
      Self::Timestamp { source, .. } => Some(source),
      Self::Range { source, .. } => Some(source),
      _ => None,
    }
  }
}

impl From<io::Error> for FeedError {
  fn from(error: io::Error) -> Self {
    FeedError::Io(error)
  }
}

impl From<serde_json::Error> for FeedError {
  fn from(error: serde_json::Error) -> Self {
    FeedError::Malformed(error)
  }
}
