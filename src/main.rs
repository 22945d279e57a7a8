//! `circlescore` - score circle drawings and export trial sessions.

mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    circlescore::init_logging();

    let cli = cli::Cli::parse();
    cli::run(cli)
}
