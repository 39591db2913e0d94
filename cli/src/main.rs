use std::io;

use propr_cli::commands::CommandLine;
use propr_cli::session::{self, SessionOutcome};
use propr_cli::terminal::logging;
use propr_common::config::Config;

fn main() -> anyhow::Result<()> {
    let _args = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config::default();

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut out = io::stdout();

    match session::run(&cfg, &mut reader, &mut out)? {
        SessionOutcome::Completed => Ok(()),
        SessionOutcome::Declined => std::process::exit(1),
    }
}
