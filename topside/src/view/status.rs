use crate::{
  feed::TelemetryFeed,
  view::{ProjectError, StatusField},
};
use common::format;

/// The five display-ready values of the status panel.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusPanel {
  /// Depth of the latest reading, rendered as-is.
  pub depth: String,

  /// Heading of the latest reading, rendered as-is.
  pub heading: String,

  /// Speed of the latest reading, to one decimal place.
  pub speed: String,

  /// Battery charge of the latest reading, rendered as-is.
  pub battery: String,

  /// Absolute date and time of the latest reading.
  pub last_updated: String,
}

impl StatusPanel {
  /// The panel's values paired with their field identifiers, in display
  /// order.
  pub fn fields(&self) -> [(StatusField, String); 5] {
    [
      (StatusField::Depth, self.depth.clone()),
      (StatusField::Heading, self.heading.clone()),
      (StatusField::Speed, self.speed.clone()),
      (StatusField::Battery, self.battery.clone()),
      (StatusField::LastUpdated, self.last_updated.clone()),
    ]
  }
}

/// Projects the most recent reading into the status panel.
///
/// The telemetry log and charts degrade gracefully on an empty feed, but the
/// status panel refuses to render instead: blank current-state fields are
/// indistinguishable from a healthy vehicle, which is exactly the wrong
/// thing to show an operator.
pub fn project(feed: &TelemetryFeed) -> Result<StatusPanel, ProjectError> {
  let latest = feed.latest().ok_or(ProjectError::EmptyFeed)?;

  Ok(StatusPanel {
    depth: format::raw(latest.depth_m),
    heading: format::raw(latest.heading_deg),
    speed: format::one_decimal(latest.speed_kn),
    battery: format::raw(latest.battery_pct),
    last_updated: format::date_time(latest.timestamp),
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::feed::sample;
  use chrono::DateTime;
  use common::telemetry::TelemetryReading;

  #[test]
  fn project_reflects_the_latest_reading() {
    let panel = project(&sample::dive())
      .expect("the sample dive should project to a status panel");

    assert_eq!(panel.depth, "65");
    assert_eq!(panel.heading, "207");
    assert_eq!(panel.speed, "1.7");
    assert_eq!(panel.battery, "87");
    assert_eq!(panel.last_updated, "2026-03-14 09:29:00");
  }

  #[test]
  fn project_formats_a_single_surfaced_reading() {
    let feed = TelemetryFeed::new(vec![TelemetryReading {
      timestamp: DateTime::parse_from_rfc3339("2026-03-14T10:00:00Z")
        .expect("test timestamp should parse as RFC 3339")
        .with_timezone(&chrono::Utc),
      depth_m: 10.0,
      heading_deg: 0.0,
      speed_kn: 0.0,
      battery_pct: 100.0,
      temperature_c: 11.0,
      pressure_kpa: 202.0,
    }])
    .expect("a single valid reading should form a feed");

    let panel =
      project(&feed).expect("a one-reading feed should project to a panel");

    assert_eq!(panel.depth, "10");
    assert_eq!(panel.heading, "0");
    assert_eq!(panel.speed, "0.0");
    assert_eq!(panel.battery, "100");
  }

  #[test]
  fn project_fails_on_an_empty_feed() {
    let feed = TelemetryFeed::new(Vec::new())
      .expect("an empty sequence should form an empty feed");

    assert_eq!(project(&feed), Err(ProjectError::EmptyFeed));
  }

  #[test]
  fn fields_come_back_in_display_order() {
    let panel = project(&sample::dive())
      .expect("the sample dive should project to a status panel");

    let order: Vec<StatusField> =
      panel.fields().iter().map(|(field, _)| *field).collect();

    assert_eq!(order, StatusField::ALL);
  }
}
