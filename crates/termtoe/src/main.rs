//! termtoe - tic-tac-toe in the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use termtoe::TuiConfig;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = TuiConfig::load(cli.config.as_deref())?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }
    if cli.no_vim_keys {
        config = config.with_vim_keys(false);
    }

    termtoe::init_tracing(config.log_file())?;
    info!(config = ?config, "Starting termtoe");

    termtoe::run(&config)
}
