//! Projections from the telemetry feed to display-ready view models, and the
//! bootstrap that fans them out to a rendering surface.
//!
//! Every projector is a pure function of the feed. Side effects happen only
//! through the [`Surface`] trait, so the same projections drive the terminal
//! dashboard, the plain-text printer, and the recording surfaces used in
//! tests.

use crate::feed::TelemetryFeed;
use std::{error::Error, fmt};

/// Chart projections and their declarative spec type.
pub mod chart;

/// The status panel projection.
pub mod status;

/// The telemetry log projection.
pub mod table;

mod surface;

pub use surface::{Region, StatusField, Surface};

/// Any reason a projector can decline to produce its view model.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProjectError {
  /// The projection requires at least one reading and the feed has none.
  EmptyFeed,
}

impl fmt::Display for ProjectError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::EmptyFeed => {
        write!(f, "the telemetry feed holds no readings to project")
      }
    }
  }
}

impl Error for ProjectError {}

/// A region that failed to render during a dashboard pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Failure {
  /// The region that failed.
  pub region: Region,

  /// Operator-facing description of what went wrong.
  pub message: String,
}

/// Renders the full dashboard onto a surface from one feed snapshot.
///
/// Regions are independent: a failed projection is reported on the surface
/// in that region's place and collected into the return value, and the
/// remaining regions still render. Because every surface write replaces
/// state wholesale, calling this twice with the same feed leaves the surface
/// exactly as one call would.
pub fn render_dashboard<S: Surface>(
  feed: &TelemetryFeed,
  surface: &mut S,
) -> Vec<Failure> {
  let mut failures = Vec::new();

  match status::project(feed) {
    Ok(panel) => {
      for (field, value) in panel.fields() {
        surface.set_field(field, value);
      }
    }
    Err(error) => {
      let message = error.to_string();

      surface.report_failure(Region::Status, message.clone());
      failures.push(Failure {
        region: Region::Status,
        message,
      });
    }
  }

  surface.replace_rows(table::project(feed));
  surface.render_chart(chart::depth(feed));
  surface.render_chart(chart::environment(feed));

  failures
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    feed::sample,
    view::{chart::ChartSpec, table::TableRow},
  };
  use std::collections::HashMap;

  /// A surface that just stores whatever is rendered onto it.
  #[derive(Clone, Debug, Default, PartialEq)]
  struct RecordingSurface {
    fields: HashMap<StatusField, String>,
    rows: Vec<TableRow>,
    charts: HashMap<chart::ChartKind, ChartSpec>,
    failures: Vec<(Region, String)>,
  }

  impl Surface for RecordingSurface {
    fn set_field(&mut self, field: StatusField, value: String) {
      self.fields.insert(field, value);
    }

    fn replace_rows(&mut self, rows: Vec<TableRow>) {
      self.rows = rows;
    }

    fn render_chart(&mut self, chart: ChartSpec) {
      self.charts.insert(chart.kind, chart);
    }

    fn report_failure(&mut self, region: Region, message: String) {
      self.failures.push((region, message));
    }
  }

  #[test]
  fn render_dashboard_fills_every_region() {
    let mut surface = RecordingSurface::default();

    let failures = render_dashboard(&sample::dive(), &mut surface);

    assert!(failures.is_empty());
    assert_eq!(surface.fields.len(), StatusField::ALL.len());
    assert_eq!(surface.rows.len(), 10);
    assert_eq!(surface.charts.len(), 2);
    assert!(surface.failures.is_empty());

    assert_eq!(
      surface.fields.get(&StatusField::Battery).map(String::as_str),
      Some("87")
    );
  }

  #[test]
  fn render_dashboard_is_idempotent() {
    let feed = sample::dive();
    let mut surface = RecordingSurface::default();

    render_dashboard(&feed, &mut surface);
    let after_first = surface.clone();

    render_dashboard(&feed, &mut surface);

    assert_eq!(
      surface, after_first,
      "a second render of the same feed should not change the surface"
    );
  }

  #[test]
  fn empty_feed_fails_only_the_status_region() {
    let feed = TelemetryFeed::new(Vec::new())
      .expect("an empty sequence should form an empty feed");
    let mut surface = RecordingSurface::default();

    let failures = render_dashboard(&feed, &mut surface);

    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].region, Region::Status);

    // The other regions still render, just empty.
    assert!(surface.fields.is_empty());
    assert!(surface.rows.is_empty());
    assert_eq!(surface.charts.len(), 2);

    let depth = surface
      .charts
      .get(&chart::ChartKind::Depth)
      .expect("the depth chart should render even when empty");
    assert!(depth.series[0].points.is_empty());
  }

  #[test]
  fn single_reading_renders_one_row_and_one_point_per_series() {
    let feed = TelemetryFeed::from_json(
      r#"[
        {
          "timestamp": "2026-03-14T10:00:00Z",
          "depth_m": 10,
          "heading_deg": 0,
          "speed_kn": 0,
          "battery_pct": 100,
          "temperature_c": 11.0,
          "pressure_kpa": 202.0
        }
      ]"#,
    )
    .expect("a single-reading document should parse");

    let mut surface = RecordingSurface::default();
    let failures = render_dashboard(&feed, &mut surface);

    assert!(failures.is_empty());
    assert_eq!(surface.rows.len(), 1);
    assert_eq!(
      surface.fields.get(&StatusField::Speed).map(String::as_str),
      Some("0.0")
    );

    for spec in surface.charts.values() {
      for series in &spec.series {
        assert_eq!(series.points.len(), 1);
      }
      assert_eq!(spec.x_labels.len(), 1);
    }
  }

  #[test]
  fn failures_are_mirrored_onto_the_surface() {
    let feed = TelemetryFeed::new(Vec::new())
      .expect("an empty sequence should form an empty feed");
    let mut surface = RecordingSurface::default();

    let failures = render_dashboard(&feed, &mut surface);

    assert_eq!(surface.failures.len(), failures.len());
    assert_eq!(surface.failures[0].0, Region::Status);
    assert_eq!(surface.failures[0].1, failures[0].message);
  }
}
