//! Main application entry point (server binary).
//!
//! This is a thin wrapper around the `product_importer` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use product_importer::initialization::init_logger_with;
use product_importer::{start_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Try the current directory first, then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = start_server(config).await {
        eprintln!("product_importer error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
