//! logokey CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the
//! transform, and exit with an error on the first failure.
//! For programmatic use, prefer the library API (`logokey::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
