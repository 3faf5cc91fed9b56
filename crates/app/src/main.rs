//! Storefront cart CLI

use std::{io, process};

use crate::config::AppConfig;

mod commands;
mod config;
mod errors;
mod logging;
mod session;

/// Storefront cart CLI entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = AppConfig::load().unwrap_or_else(|e| e.exit());

    if let Err(e) = logging::init(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, must use eprintln"
        )]
        {
            eprintln!("{e}");
        }

        process::exit(1);
    }

    let mut stdout = io::stdout().lock();

    if let Err(e) = commands::execute(config.command, &config.store, &mut stdout).await {
        #[expect(
            clippy::print_stderr,
            reason = "user-facing error, shown even when logs are filtered out"
        )]
        {
            eprintln!("error: {e}");
        }

        process::exit(1);
    }
}
