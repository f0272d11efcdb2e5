//! Decimat - live decision-matrix viewer and spreadsheet exporter.

mod actor;
mod cli;
mod core;
mod embed;
mod logger;
mod matrix;
mod serve;
mod xlsx;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();
    logger::set_verbose(cli.verbose);

    if cli.instructions {
        println!("{}", cli::instructions::INSTRUCTIONS);
        return Ok(());
    }

    serve::run(&cli)
}
