mod check;
mod export;
mod print;
mod sample;
mod view;

pub use check::check;
pub use export::export;
pub use print::print;
pub use sample::sample;
pub use view::view;

use crate::feed::TelemetryFeed;
use std::path::Path;

/// Loads the feed named by a tool's `--feed` argument, or the built-in
/// sample dive when none was given.
fn load_feed(path: Option<&String>) -> anyhow::Result<TelemetryFeed> {
  match path {
    Some(path) => Ok(TelemetryFeed::from_json_file(Path::new(path))?),
    None => Ok(crate::feed::sample::dive()),
  }
}
