//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `link_analyzer` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use link_analyzer::initialization::init_logger_with;
use link_analyzer::{run, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before parsing so LINK_ANALYZER_ENDPOINT can come from it
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run(config).await {
        Ok(report) => process::exit(report.exit_code()),
        Err(e) => {
            eprintln!("link_analyzer error: {:#}", e);
            process::exit(1);
        }
    }
}
