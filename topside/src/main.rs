use clap::{Arg, ArgAction, Command};
use jeflog::fail;
use std::process;
use topside::tool;

fn main() -> anyhow::Result<()> {
  let matches = Command::new("topside")
    .about("Topside command line console for ROV telemetry")
    .subcommand_required(true)
    .subcommand(
      Command::new("view")
        .about("Opens the interactive terminal dashboard over a telemetry feed.")
        .arg(Arg::new("feed").long("feed").short('f').required(false))
        .arg(
          Arg::new("window")
            .long("window")
            .short('w')
            .required(false)
            .value_parser(clap::value_parser!(u32)),
        ),
    )
    .subcommand(
      Command::new("print")
        .about("Renders the dashboard once as plain text.")
        .arg(Arg::new("feed").long("feed").short('f').required(false))
        .arg(
          Arg::new("window")
            .long("window")
            .short('w')
            .required(false)
            .value_parser(clap::value_parser!(u32)),
        ),
    )
    .subcommand(
      Command::new("export")
        .about("Exports a telemetry feed as CSV for offline analysis.")
        .arg(Arg::new("output_path").required(true).short('o'))
        .arg(Arg::new("feed").long("feed").short('f').required(false)),
    )
    .subcommand(
      Command::new("check")
        .about("Validates a telemetry feed document and reports the result.")
        .arg(Arg::new("path").required(true)),
    )
    .subcommand(
      Command::new("sample")
        .about("Writes a sample telemetry feed document.")
        .arg(Arg::new("output_path").required(true).short('o'))
        .arg(
          Arg::new("count")
            .long("count")
            .short('n')
            .required(false)
            .value_parser(clap::value_parser!(usize)),
        )
        .arg(
          Arg::new("force")
            .long("force")
            .action(ArgAction::SetTrue),
        ),
    )
    .get_matches();

  match matches.subcommand() {
    Some(("view", args)) => tool::view(args)?,
    Some(("print", args)) => tool::print(args)?,
    Some(("export", args)) => tool::export(args)?,
    Some(("check", args)) => tool::check(args)?,
    Some(("sample", args)) => tool::sample(args)?,
    _ => {
      fail!("Invalid command. Please check the command you entered.");
      process::exit(1);
    }
  };

  Ok(())
}
