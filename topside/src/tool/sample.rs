use crate::feed::{sample, TelemetryFeed};
use anyhow::anyhow;
use chrono::{Duration, Utc};
use clap::ArgMatches;
use common::telemetry::TelemetryReading;
use jeflog::{pass, task};
use rand::Rng;
use std::{fs, path::Path};

/// Tool function which writes a sample telemetry feed document.
///
/// Without `--count`, the canonical ten-reading dive is written verbatim.
/// With it, a synthetic dive profile of the requested length is generated
/// and validated through the same boundary every other tool loads through.
pub fn sample(args: &ArgMatches) -> anyhow::Result<()> {
  let output_path = args.get_one::<String>("output_path").unwrap();
  let count = args.get_one::<usize>("count").copied();
  let force = args.get_one::<bool>("force").copied().unwrap_or(false);

  if Path::new(output_path).exists() && !force {
    return Err(anyhow!(
      "'{output_path}' already exists; pass --force to overwrite it"
    ));
  }

  let document = match count {
    Some(count) => {
      task!("Synthesizing a dive profile with {count} readings.");

      let feed = TelemetryFeed::new(synthesize(count))?;
      let mut document = serde_json::to_string_pretty(feed.readings())?;
      document.push('\n');

      document
    }
    None => sample::DIVE_DOCUMENT.to_owned(),
  };

  fs::write(output_path, document)?;

  pass!("Wrote sample feed to \x1b[1m{output_path}\x1b[0m.");

  Ok(())
}

/// Synthesizes a plausible dive profile of the given length, one reading per
/// minute ending now.
///
/// The vehicle descends at roughly two meters a minute with sensor noise,
/// drifts slowly to starboard, cools as it sinks, and drains its battery
/// about a percentage point a minute. Pressure tracks depth at seawater
/// rates.
fn synthesize(count: usize) -> Vec<TelemetryReading> {
  let mut rng = rand::thread_rng();
  let start = Utc::now() - Duration::minutes(count as i64);

  let mut readings = Vec::with_capacity(count);

  let mut depth: f64 = 40.0;
  let mut heading: f64 = 180.0;
  let mut battery: f64 = 100.0;

  for index in 0..count {
    depth = (depth + 2.0 + rng.gen_range(-1.5..1.5)).max(0.0);
    heading = (heading + rng.gen_range(-2.0..5.0)).rem_euclid(360.0);
    battery = (battery - rng.gen_range(0.7..1.1)).max(0.0);

    let speed = (1.5_f64 + rng.gen_range(-0.4..0.4)).max(0.0);
    let temperature = 14.0 - depth * 0.11 + rng.gen_range(-0.2..0.2);
    let pressure = (101.3 + depth * 10.05 + rng.gen_range(-2.0..2.0)).max(0.0);

    readings.push(TelemetryReading {
      timestamp: start + Duration::minutes(index as i64),
      depth_m: round1(depth),
      // Rounding can land exactly on 360, which is outside the heading
      // domain, so wrap once more afterwards.
      heading_deg: round1(heading).rem_euclid(360.0),
      speed_kn: round1(speed),
      battery_pct: round1(battery),
      temperature_c: round1(temperature),
      pressure_kpa: round1(pressure),
    });
  }

  readings
}

/// Rounds to one decimal place, keeping generated documents readable.
fn round1(value: f64) -> f64 {
  (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn synthesized_profiles_satisfy_the_feed_invariants() {
    let feed = TelemetryFeed::new(synthesize(25))
      .expect("a synthesized profile should always pass the feed boundary");

    assert_eq!(feed.len(), 25);
  }

  #[test]
  fn synthesized_speeds_stay_in_domain() {
    for reading in synthesize(50) {
      assert!(reading.speed_kn.is_finite());
      assert!(reading.speed_kn >= 0.0);
    }
  }

  #[test]
  fn synthesized_readings_are_a_minute_apart() {
    let readings = synthesize(5);

    for pair in readings.windows(2) {
      let gap = pair[1].timestamp - pair[0].timestamp;
      assert_eq!(gap.num_seconds(), 60);
    }
  }

  #[test]
  fn synthesized_profiles_serialize_to_loadable_documents() {
    let readings = synthesize(8);

    let document = serde_json::to_string_pretty(&readings)
      .expect("synthesized readings should serialize to JSON");

    let feed = TelemetryFeed::from_json(&document)
      .expect("a synthesized document should load back through the boundary");

    assert_eq!(feed.len(), 8);
  }

  #[test]
  fn round1_keeps_one_fractional_digit() {
    assert_eq!(round1(47.38291), 47.4);
    assert_eq!(round1(100.0), 100.0);
    assert_eq!(round1(0.04), 0.0);
  }
}
