//! Command-line interface for termtoe.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "termtoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./termtoe.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs here instead of the configured log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Only use the arrow keys for cursor movement
    #[arg(long)]
    pub no_vim_keys: bool,
}
