use clap::Parser;

/// The surface is deliberately bare: one interactive session, no flags
/// and no subcommands. Parsing still runs so `--help` and `--version`
/// behave like any other tool.
#[derive(Parser)]
#[command(name = "propr")]
#[command(about = "An interactive property investment calculator.")]
#[command(version)]
pub struct CommandLine {}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
