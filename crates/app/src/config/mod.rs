//! CLI configuration

use clap::Parser;

use crate::{
    commands::Command,
    config::{logging::LoggingConfig, store::StoreConfig},
};

pub(crate) mod logging;
pub(crate) mod store;

pub(crate) use logging::LogFormat;

/// Storefront cart CLI configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-app", about = "Storefront cart CLI", long_about = None)]
pub(crate) struct AppConfig {
    /// Cart storage, catalog and pricing settings.
    #[command(flatten)]
    pub store: StoreConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Command to run against the cart.
    #[command(subcommand)]
    pub command: Command,
}

impl AppConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
