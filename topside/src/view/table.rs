use crate::feed::TelemetryFeed;
use common::format;

/// One display-ready row of the telemetry log.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
  /// Wall-clock time of the reading.
  pub time: String,

  /// Depth in meters, rendered as-is.
  pub depth: String,

  /// Heading in degrees, rendered as-is.
  pub heading: String,

  /// Speed in knots, to one decimal place.
  pub speed: String,

  /// Battery percentage, rendered as-is.
  pub battery: String,
}

impl TableRow {
  /// Column headers, in the same order as [`TableRow::cells`].
  pub const HEADERS: [&'static str; 5] =
    ["Time", "Depth (m)", "Heading (°)", "Speed (kn)", "Battery (%)"];

  /// The row's cells in column order.
  pub fn cells(&self) -> [&str; 5] {
    [
      &self.time,
      &self.depth,
      &self.heading,
      &self.speed,
      &self.battery,
    ]
  }
}

/// Projects the full feed into telemetry log rows, most recent first.
///
/// The output is the exact reversal of the feed's storage order, not a
/// re-sort. An empty feed projects to an empty table rather than an error.
pub fn project(feed: &TelemetryFeed) -> Vec<TableRow> {
  feed
    .readings()
    .iter()
    .rev()
    .map(|reading| TableRow {
      time: format::time_of_day(reading.timestamp),
      depth: format::raw(reading.depth_m),
      heading: format::raw(reading.heading_deg),
      speed: format::one_decimal(reading.speed_kn),
      battery: format::raw(reading.battery_pct),
    })
    .collect()
}
