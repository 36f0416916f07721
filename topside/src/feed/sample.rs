//! The built-in sample feed: one short morning dive used for demonstrations
//! and as a known-good fixture.

use crate::feed::TelemetryFeed;

/// The sample dive as a feed document.
///
/// Ten readings at a one-minute cadence covering a descent from 45 m to
/// 65 m, with a brief rise at 09:27. The `sample` tool writes this document
/// verbatim when no synthetic profile is requested.
pub const DIVE_DOCUMENT: &str = r#"[
  { "timestamp": "2026-03-14T09:20:00Z", "depth_m": 45, "heading_deg": 182, "speed_kn": 1.2, "battery_pct": 96, "temperature_c": 7.8, "pressure_kpa": 553.6 },
  { "timestamp": "2026-03-14T09:21:00Z", "depth_m": 48, "heading_deg": 184, "speed_kn": 1.4, "battery_pct": 95, "temperature_c": 7.6, "pressure_kpa": 583.9 },
  { "timestamp": "2026-03-14T09:22:00Z", "depth_m": 52, "heading_deg": 187, "speed_kn": 1.3, "battery_pct": 94, "temperature_c": 7.4, "pressure_kpa": 624.2 },
  { "timestamp": "2026-03-14T09:23:00Z", "depth_m": 55, "heading_deg": 189, "speed_kn": 1.5, "battery_pct": 93, "temperature_c": 7.2, "pressure_kpa": 653.8 },
  { "timestamp": "2026-03-14T09:24:00Z", "depth_m": 58, "heading_deg": 193, "speed_kn": 1.4, "battery_pct": 92, "temperature_c": 7.1, "pressure_kpa": 684.5 },
  { "timestamp": "2026-03-14T09:25:00Z", "depth_m": 60, "heading_deg": 196, "speed_kn": 1.6, "battery_pct": 91, "temperature_c": 6.9, "pressure_kpa": 704.1 },
  { "timestamp": "2026-03-14T09:26:00Z", "depth_m": 62, "heading_deg": 198, "speed_kn": 1.5, "battery_pct": 90, "temperature_c": 6.8, "pressure_kpa": 724.9 },
  { "timestamp": "2026-03-14T09:27:00Z", "depth_m": 61, "heading_deg": 201, "speed_kn": 1.6, "battery_pct": 89, "temperature_c": 6.8, "pressure_kpa": 713.6 },
  { "timestamp": "2026-03-14T09:28:00Z", "depth_m": 63, "heading_deg": 204, "speed_kn": 1.8, "battery_pct": 88, "temperature_c": 6.7, "pressure_kpa": 734.8 },
  { "timestamp": "2026-03-14T09:29:00Z", "depth_m": 65, "heading_deg": 207, "speed_kn": 1.7, "battery_pct": 87, "temperature_c": 6.6, "pressure_kpa": 755.2 }
]"#;

/// Returns the built-in sample dive as a ready feed.
pub fn dive() -> TelemetryFeed {
  TelemetryFeed::from_json(DIVE_DOCUMENT)
    .expect("the built-in sample document must satisfy the feed invariants")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn dive_holds_ten_readings_at_a_minute_cadence() {
    let feed = dive();

    assert_eq!(feed.len(), 10);

    let readings = feed.readings();
    for pair in readings.windows(2) {
      let gap = pair[1].timestamp - pair[0].timestamp;
      assert_eq!(gap.num_seconds(), 60);
    }
  }

  #[test]
  fn dive_ends_at_the_expected_state() {
    let feed = dive();
    let latest = feed.latest().expect("the sample dive should not be empty");

    assert_eq!(latest.depth_m, 65.0);
    assert_eq!(latest.heading_deg, 207.0);
    assert_eq!(latest.speed_kn, 1.7);
    assert_eq!(latest.battery_pct, 87.0);
  }

  #[test]
  fn dive_depths_trace_the_descent() {
    let depths: Vec<f64> = dive()
      .readings()
      .iter()
      .map(|reading| reading.depth_m)
      .collect();

    assert_eq!(
      depths,
      [45.0, 48.0, 52.0, 55.0, 58.0, 60.0, 62.0, 61.0, 63.0, 65.0]
    );
  }

  #[test]
  fn dive_battery_drains_monotonically() {
    let feed = dive();

    for pair in feed.readings().windows(2) {
      assert!(
        pair[1].battery_pct <= pair[0].battery_pct,
        "battery should never recover during the sample dive"
      );
    }
  }
}
