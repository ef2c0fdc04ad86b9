//! novelsplit command-line entry point

use clap::Parser;
use novelsplit_cli::commands::Commands;

/// Split plain-text novels into chapters
#[derive(Debug, Parser)]
#[command(name = "novelsplit")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
