use crate::tool;
use clap::ArgMatches;
use common::telemetry::TelemetryReading;
use jeflog::{pass, task};
use std::fs;

/// Header row of an exported feed, matching the column order of
/// [`csv_record`].
const CSV_HEADER: &str =
  "timestamp,depth_m,heading_deg,speed_kn,battery_pct,temperature_c,pressure_kpa";

/// Tool function which exports a telemetry feed as CSV.
///
/// Rows are written in storage order (oldest first) with RFC 3339
/// timestamps, one line per reading, so the output re-imports cleanly into
/// analysis tools.
pub fn export(args: &ArgMatches) -> anyhow::Result<()> {
  let feed = tool::load_feed(args.get_one::<String>("feed"))?;
  let output_path = args.get_one::<String>("output_path").unwrap();

  task!("Exporting {} readings to \x1b[1m{output_path}\x1b[0m.", feed.len());

  let mut content = String::from(CSV_HEADER);
  content.push('\n');

  for reading in feed.readings() {
    content.push_str(&csv_record(reading));
    content.push('\n');
  }

  fs::write(output_path, content)?;

  pass!("Exported feed to \x1b[1m{output_path}\x1b[0m.");

  Ok(())
}

/// One CSV line for a reading, without the trailing newline.
fn csv_record(reading: &TelemetryReading) -> String {
  format!(
    "{},{},{},{},{},{},{}",
    reading.timestamp.to_rfc3339(),
    reading.depth_m,
    reading.heading_deg,
    reading.speed_kn,
    reading.battery_pct,
    reading.temperature_c,
    reading.pressure_kpa,
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::feed::sample;

  #[test]
  fn csv_record_writes_every_field_in_header_order() {
    let feed = sample::dive();
    let latest = feed.latest().expect("the sample dive should not be empty");

    assert_eq!(
      csv_record(latest),
      "2026-03-14T09:29:00+00:00,65,207,1.7,87,6.6,755.2"
    );
  }

  #[test]
  fn csv_record_column_count_matches_the_header() {
    let feed = sample::dive();
    let latest = feed.latest().expect("the sample dive should not be empty");

    assert_eq!(
      csv_record(latest).split(',').count(),
      CSV_HEADER.split(',').count()
    );
  }
}
