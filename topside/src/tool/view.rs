use crate::{interface, tool};
use clap::ArgMatches;
use jeflog::task;

/// Tool function which opens the interactive terminal dashboard over a feed.
///
/// With `--window <minutes>`, only the trailing window of the feed is
/// projected; by default the whole feed is.
pub fn view(args: &ArgMatches) -> anyhow::Result<()> {
  let feed = tool::load_feed(args.get_one::<String>("feed"))?;

  let feed = match args.get_one::<u32>("window") {
    Some(&minutes) => feed.window(minutes),
    None => feed,
  };

  task!("Opening dashboard over {} readings.", feed.len());
  interface::display(&feed)?;

  Ok(())
}
