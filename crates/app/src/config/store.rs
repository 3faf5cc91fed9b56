//! Store Config

use std::path::PathBuf;

use clap::Args;
use storefront::{checkout::DEFAULT_SHIPPING_COST, money::DEFAULT_CURRENCY};

/// Cart storage, catalog and pricing settings.
#[derive(Debug, Args)]
pub(crate) struct StoreConfig {
    /// File the cart is persisted to between runs
    #[arg(
        long,
        env = "STOREFRONT_STORAGE_PATH",
        default_value = ".storefront/storage.json",
        global = true
    )]
    pub storage_path: PathBuf,

    /// YAML catalog to load instead of the bundled demo menu
    #[arg(long, env = "STOREFRONT_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    /// ISO currency code prices are shown in
    #[arg(long, env = "STOREFRONT_CURRENCY", default_value = DEFAULT_CURRENCY, global = true)]
    pub currency: String,

    /// Flat delivery charge in minor units
    #[arg(
        long,
        env = "STOREFRONT_SHIPPING_COST",
        default_value_t = DEFAULT_SHIPPING_COST,
        global = true
    )]
    pub shipping_cost: u64,
}
