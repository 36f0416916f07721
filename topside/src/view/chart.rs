use crate::feed::TelemetryFeed;
use common::{format, telemetry::TelemetryReading};

/// Which dashboard chart a spec describes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ChartKind {
  /// Depth over time.
  Depth,

  /// Temperature and pressure over time.
  Environment,
}

/// One named line of a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
  /// Legend label for the series.
  pub name: String,

  /// One point per reading: x is the reading's index in storage order, y is
  /// the sensor value.
  pub points: Vec<(f64, f64)>,
}

/// A complete declarative description of one line chart.
///
/// Renderers draw exactly what the spec says and nothing more: the series
/// points, the x-axis tick labels (one formatted time per reading, in
/// storage order, co-indexed with every series), and the padded y bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
  /// Which dashboard chart this spec replaces when rendered.
  pub kind: ChartKind,

  /// Operator-facing chart title.
  pub title: String,

  /// Formatted time-of-day label for each reading.
  pub x_labels: Vec<String>,

  /// The chart's lines. Every series has the same number of points.
  pub series: Vec<ChartSeries>,

  /// Padded `[min, max]` bounds covering every point's y value.
  pub y_bounds: [f64; 2],
}

/// Projects the feed into the depth-over-time chart.
pub fn depth(feed: &TelemetryFeed) -> ChartSpec {
  project(
    ChartKind::Depth,
    "Depth Over Time",
    feed,
    &[("Depth (m)", |reading| reading.depth_m)],
  )
}

/// Projects the feed into the temperature and pressure chart.
///
/// Both series share one x axis and one y axis. The shared axis means the
/// smaller-ranged series reads nearly flat next to pressure; renderers that
/// want more resolution can rescale per series, since each series carries
/// its raw values.
pub fn environment(feed: &TelemetryFeed) -> ChartSpec {
  project(
    ChartKind::Environment,
    "Temperature and Pressure",
    feed,
    &[
      ("Temperature (°C)", |reading| reading.temperature_c),
      ("Pressure (kPa)", |reading| reading.pressure_kpa),
    ],
  )
}

fn project(
  kind: ChartKind,
  title: &str,
  feed: &TelemetryFeed,
  series: &[(&str, fn(&TelemetryReading) -> f64)],
) -> ChartSpec {
  let readings = feed.readings();

  let x_labels = readings
    .iter()
    .map(|reading| format::time_of_day(reading.timestamp))
    .collect();

  let series: Vec<ChartSeries> = series
    .iter()
    .map(|(name, value)| ChartSeries {
      name: (*name).to_owned(),
      points: readings
        .iter()
        .enumerate()
        .map(|(index, reading)| (index as f64, value(reading)))
        .collect(),
    })
    .collect();

  ChartSpec {
    kind,
    title: title.to_owned(),
    x_labels,
    y_bounds: y_bounds(&series),
    series,
  }
}

/// Computes padded y-axis bounds over every series.
///
/// A flat or empty chart still gets a non-zero span so renderers never
/// divide by a zero scale.
fn y_bounds(series: &[ChartSeries]) -> [f64; 2] {
  let mut min = f64::INFINITY;
  let mut max = f64::NEG_INFINITY;

  for series in series {
    for &(_, y) in &series.points {
      min = min.min(y);
      max = max.max(y);
    }
  }

  if min > max {
    return [0.0, 1.0];
  }

  let mut span = max - min;
  if span < 1e-9 {
    span = 1.0;
  }

  [min - span * 0.1, max + span * 0.1]
}
