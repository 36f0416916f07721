use crate::{
  tool,
  view::{
    self,
    chart::ChartSpec,
    table::TableRow,
    Region,
    StatusField,
    Surface,
  },
};
use anyhow::anyhow;
use clap::ArgMatches;
use std::collections::HashMap;

/// Glyphs used to bin chart values into a one-line sparkline.
const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Tool function which renders the dashboard once as plain text.
///
/// Exits with an error if any region failed to render, so scripts can rely
/// on the exit status.
pub fn print(args: &ArgMatches) -> anyhow::Result<()> {
  let feed = tool::load_feed(args.get_one::<String>("feed"))?;

  let feed = match args.get_one::<u32>("window") {
    Some(&minutes) => feed.window(minutes),
    None => feed,
  };

  let mut surface = TextSurface::default();
  let failures = view::render_dashboard(&feed, &mut surface);

  println!("{}", surface.render());

  if !failures.is_empty() {
    return Err(anyhow!(
      "{} dashboard region(s) failed to render",
      failures.len()
    ));
  }

  Ok(())
}

/// A plain-text rendering of the dashboard, assembled section by section.
#[derive(Default)]
struct TextSurface {
  fields: HashMap<StatusField, String>,
  rows: Vec<TableRow>,
  charts: Vec<ChartSpec>,
  failures: Vec<(Region, String)>,
}

impl Surface for TextSurface {
  fn set_field(&mut self, field: StatusField, value: String) {
    self.fields.insert(field, value);
  }

  fn replace_rows(&mut self, rows: Vec<TableRow>) {
    self.rows = rows;
  }

  fn render_chart(&mut self, chart: ChartSpec) {
    self.charts.retain(|existing| existing.kind != chart.kind);
    self.charts.push(chart);
  }

  fn report_failure(&mut self, region: Region, message: String) {
    self.failures.push((region, message));
  }
}

impl TextSurface {
  /// Renders every section into one printable document.
  fn render(&self) -> String {
    let mut out = String::new();

    out.push_str("Status\n");

    if let Some(message) = self.failure_for(Region::Status) {
      out.push_str(&format!("  unavailable: {message}\n"));
    } else {
      for field in StatusField::ALL {
        let value = self.fields.get(&field).map_or("", String::as_str);
        out.push_str(&format!("  {:<13} {value}\n", field.label()));
      }
    }

    out.push_str("\nTelemetry Log\n");

    if let Some(message) = self.failure_for(Region::Table) {
      out.push_str(&format!("  unavailable: {message}\n"));
    } else {
      self.render_table(&mut out);
    }

    for chart in &self.charts {
      out.push_str(&format!("\n{}\n", chart.title));

      for series in &chart.series {
        out.push_str(&format!(
          "  {:<17} {}\n",
          series.name,
          sparkline(&series.points)
        ));
      }

      if let (Some(first), Some(last)) =
        (chart.x_labels.first(), chart.x_labels.last())
      {
        out.push_str(&format!("  {first} .. {last}\n"));
      }
    }

    out
  }

  /// Writes the telemetry log with columns sized to their widest cell.
  fn render_table(&self, out: &mut String) {
    let mut widths: Vec<usize> = TableRow::HEADERS
      .iter()
      .map(|header| header.chars().count())
      .collect();

    for row in &self.rows {
      for (index, cell) in row.cells().into_iter().enumerate() {
        widths[index] = widths[index].max(cell.chars().count());
      }
    }

    out.push(' ');
    for (header, &width) in TableRow::HEADERS.iter().zip(&widths) {
      out.push_str(&format!(" {header:>width$}"));
    }
    out.push('\n');

    for row in &self.rows {
      out.push(' ');
      for (cell, &width) in row.cells().into_iter().zip(&widths) {
        out.push_str(&format!(" {cell:>width$}"));
      }
      out.push('\n');
    }
  }

  fn failure_for(&self, region: Region) -> Option<&str> {
    self
      .failures
      .iter()
      .find(|(failed, _)| *failed == region)
      .map(|(_, message)| message.as_str())
  }
}

/// Bins a series' y values into eight vertical levels.
///
/// Each series scales to its own extent, so two series with wildly different
/// units still both read as a shape.
fn sparkline(points: &[(f64, f64)]) -> String {
  let mut min = f64::INFINITY;
  let mut max = f64::NEG_INFINITY;

  for &(_, y) in points {
    min = min.min(y);
    max = max.max(y);
  }

  let mut span = max - min;
  if !span.is_finite() || span < 1e-9 {
    span = 1.0;
  }

  points
    .iter()
    .map(|&(_, y)| {
      let level = ((y - min) / span * (SPARK_LEVELS.len() - 1) as f64)
        .round() as usize;

      SPARK_LEVELS[level.min(SPARK_LEVELS.len() - 1)]
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::feed::{sample, TelemetryFeed};

  fn rendered(feed: &TelemetryFeed) -> String {
    let mut surface = TextSurface::default();
    view::render_dashboard(feed, &mut surface);

    surface.render()
  }

  #[test]
  fn render_shows_the_latest_state() {
    let text = rendered(&sample::dive());

    assert!(text.contains("Status"));
    assert!(text.contains("Battery (%)   87"));
    assert!(text.contains("Last Updated  2026-03-14 09:29:00"));
  }

  #[test]
  fn render_orders_the_log_newest_first() {
    let text = rendered(&sample::dive());

    let newest = text
      .find("09:29:00")
      .expect("the rendered log should contain the newest reading");
    let oldest = text
      .find("09:20:00")
      .expect("the rendered log should contain the oldest reading");

    assert!(
      newest < oldest,
      "the newest reading should print above the oldest"
    );
  }

  #[test]
  fn render_draws_one_sparkline_glyph_per_reading() {
    let feed = sample::dive();
    let text = rendered(&feed);

    let depth_line = text
      .lines()
      .find(|line| line.contains("Depth (m)") && line.contains('▁'))
      .expect("the depth chart should render a sparkline");

    let glyphs = depth_line
      .chars()
      .filter(|ch| SPARK_LEVELS.contains(ch))
      .count();

    assert_eq!(glyphs, feed.len());
  }

  #[test]
  fn render_includes_both_environment_series() {
    let text = rendered(&sample::dive());

    assert!(text.contains("Temperature and Pressure"));
    assert!(text.contains("Temperature (°C)"));
    assert!(text.contains("Pressure (kPa)"));
  }

  #[test]
  fn render_marks_the_status_section_unavailable_on_an_empty_feed() {
    let feed = TelemetryFeed::new(Vec::new())
      .expect("an empty sequence should form an empty feed");

    let text = rendered(&feed);

    assert!(text.contains("unavailable:"));
    assert!(
      text.contains("Telemetry Log"),
      "the log section should still render when the status panel fails"
    );
  }

  #[test]
  fn sparkline_spans_the_full_glyph_range() {
    let points: Vec<(f64, f64)> =
      vec![(0.0, 45.0), (1.0, 55.0), (2.0, 65.0)];

    let line = sparkline(&points);

    assert_eq!(line.chars().next(), Some('▁'));
    assert_eq!(line.chars().last(), Some('█'));
  }

  #[test]
  fn sparkline_handles_flat_and_empty_series() {
    assert_eq!(sparkline(&[]), "");

    let flat = sparkline(&[(0.0, 50.0), (1.0, 50.0)]);
    assert_eq!(flat.chars().count(), 2);
  }
}
