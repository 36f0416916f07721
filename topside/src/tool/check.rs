use crate::feed::TelemetryFeed;
use clap::ArgMatches;
use common::ToPrettyString;
use jeflog::{fail, pass, task, warn};
use std::{path::Path, process};

/// Tool function which validates a telemetry feed document and reports the
/// result.
///
/// Runs the same ingestion boundary the dashboard uses, so a feed that
/// checks clean here is guaranteed to render there.
pub fn check(args: &ArgMatches) -> anyhow::Result<()> {
  let path = args.get_one::<String>("path").unwrap();

  task!("Checking telemetry feed \x1b[1m{path}\x1b[0m.");

  let feed = match TelemetryFeed::from_json_file(Path::new(path)) {
    Ok(feed) => feed,
    Err(error) => {
      fail!("Feed \x1b[1m{path}\x1b[0m is not usable: {error}");
      process::exit(1);
    }
  };

  match feed.latest() {
    Some(latest) => {
      pass!("Feed \x1b[1m{path}\x1b[0m holds {} readings.", feed.len());
      println!("{}", latest.to_pretty_string());
    }
    None => {
      warn!(
        "Feed \x1b[1m{path}\x1b[0m is valid but empty; the status panel \
         will not render from it."
      );
    }
  }

  Ok(())
}
