use clap::Parser;
use cmudict_cli::commands::Commands;
use cmudict_cli::CliResult;

/// Validate and convert CMU pronunciation dictionaries
#[derive(Debug, Parser)]
#[command(name = "cmudict", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
