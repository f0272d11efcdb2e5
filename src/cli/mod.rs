//! Command-line interface definitions.

pub mod instructions;

use clap::Parser;
use std::path::PathBuf;

/// Default port for the viewer server.
pub const DEFAULT_PORT: u16 = 3000;

/// Decimat CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about = "Live decision-matrix viewer and spreadsheet exporter", long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Path to the decision matrix file (default: first .json file in ./.decisions)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Port number to listen on
    #[arg(short, long, default_value = "3000", value_parser = port_or_default)]
    pub port: u16,

    /// Print the decision matrix format documentation and exit
    #[arg(short, long)]
    pub instructions: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,

    /// Print version information and exit
    #[arg(long, action = clap::ArgAction::Version, value_parser = clap::value_parser!(bool))]
    pub version: Option<bool>,
}

/// Parse a port argument, falling back to the default on non-numeric input.
fn port_or_default(s: &str) -> Result<u16, std::convert::Infallible> {
    Ok(s.parse().unwrap_or(DEFAULT_PORT))
}
