//! CLI entry point for the closed knight's tour solvers

use clap::Parser;
use knights_tour::io::cli::{Cli, CommandRunner};

fn main() -> knights_tour::Result<()> {
    let cli = Cli::parse();
    CommandRunner::new(cli).execute()
}
