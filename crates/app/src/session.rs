//! CLI session
//!
//! One invocation of the binary is one session: the cart store is initialised from disk,
//! a single command runs, and the store is disposed before exit.

use rusty_money::iso::Currency;
use tracing::debug;

use storefront::{
    cart::{CartChange, CartStore},
    catalog::{ProductCatalog, StaticCatalog},
    money,
    products::{Product, ProductId},
    storage::{FileStorage, KeyValueStorage},
};

use crate::{config::store::StoreConfig, errors::AppError};

/// Cart store plus the catalog products are resolved against.
#[derive(Debug)]
pub(crate) struct Session<S: KeyValueStorage> {
    store: CartStore<S>,
    catalog: StaticCatalog,
    shipping_cost: u64,
}

impl Session<FileStorage> {
    /// Open a session backed by the configured storage file and catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the currency is unknown, the catalog cannot be loaded, or the
    /// catalog is priced in a different currency.
    pub(crate) fn open(config: &StoreConfig) -> Result<Self, AppError> {
        let currency = money::currency(&config.currency)?;

        let catalog = match &config.catalog {
            Some(path) => StaticCatalog::from_path(path)?,
            None => StaticCatalog::demo()?,
        };

        if let Some(catalog_currency) = catalog.currency().filter(|found| *found != currency) {
            return Err(AppError::CurrencyMismatch {
                catalog: catalog_currency.iso_alpha_code,
                configured: currency.iso_alpha_code,
            });
        }

        let storage = FileStorage::new(&config.storage_path);

        Ok(Self::new(storage, catalog, currency, config.shipping_cost))
    }
}

impl<S: KeyValueStorage> Session<S> {
    pub(crate) fn new(
        storage: S,
        catalog: StaticCatalog,
        currency: &'static Currency,
        shipping_cost: u64,
    ) -> Self {
        let mut store = CartStore::init(storage).with_currency(currency);

        store.subscribe(|cart| {
            debug!(
                lines = cart.len(),
                items = cart.item_count(),
                total = cart.total(),
                "cart updated"
            );
        });

        Self {
            store,
            catalog,
            shipping_cost,
        }
    }

    pub(crate) fn store(&self) -> &CartStore<S> {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut CartStore<S> {
        &mut self.store
    }

    pub(crate) fn catalog(&self) -> &StaticCatalog {
        &self.catalog
    }

    pub(crate) fn shipping_cost(&self) -> u64 {
        self.shipping_cost
    }

    /// Resolve `product_id` and add one unit of it to the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is unknown or not offered for sale.
    pub(crate) fn add(&mut self, product_id: &ProductId) -> Result<CartChange, AppError> {
        let product = lookup(&self.catalog, product_id)?;

        Ok(self.store.add(product))
    }

    /// Format minor units in the session currency.
    pub(crate) fn format(&self, minor_units: u64) -> String {
        money::format_minor(minor_units, self.store.currency())
    }

    /// End the session, handing back the storage backend.
    pub(crate) fn close(self) -> S {
        self.store.dispose()
    }
}

fn lookup<'a>(catalog: &'a StaticCatalog, product_id: &ProductId) -> Result<&'a Product, AppError> {
    let product = catalog
        .product(product_id)
        .ok_or_else(|| AppError::UnknownProduct(product_id.clone()))?;

    if !product.is_active {
        return Err(AppError::InactiveProduct(product_id.clone()));
    }

    Ok(product)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use rusty_money::iso;
    use tempfile::tempdir;
    use testresult::TestResult;

    use storefront::{checkout::DEFAULT_SHIPPING_COST, storage::MemoryStorage};

    use super::*;

    fn session() -> Result<Session<MemoryStorage>, AppError> {
        Ok(Session::new(
            MemoryStorage::new(),
            StaticCatalog::demo()?,
            iso::IDR,
            DEFAULT_SHIPPING_COST,
        ))
    }

    fn store_config(storage_path: PathBuf, currency: &str) -> StoreConfig {
        StoreConfig {
            storage_path,
            catalog: None,
            currency: currency.to_string(),
            shipping_cost: DEFAULT_SHIPPING_COST,
        }
    }

    #[test]
    fn adds_catalog_products() -> TestResult {
        let mut session = session()?;

        let change = session.add(&ProductId::from("1"))?;

        assert_eq!(change, CartChange::Added(ProductId::from("1")));
        assert_eq!(session.store().total(), 2_500_000);

        Ok(())
    }

    #[test]
    fn rejects_unknown_and_inactive_products() -> TestResult {
        let mut session = session()?;

        assert!(matches!(
            session.add(&ProductId::from("404")),
            Err(AppError::UnknownProduct(_))
        ));
        assert!(matches!(
            session.add(&ProductId::from("6")),
            Err(AppError::InactiveProduct(_))
        ));
        assert!(session.store().cart().is_empty());

        Ok(())
    }

    #[test]
    fn formats_in_session_currency() -> TestResult {
        let session = Session::new(
            MemoryStorage::new(),
            StaticCatalog::new(Vec::new(), Vec::new())?,
            iso::USD,
            0,
        );

        assert_eq!(session.format(200_000), "$2,000.00");

        Ok(())
    }

    #[test]
    fn reopened_session_sees_previous_cart() -> TestResult {
        let dir = tempdir()?;
        let config = store_config(dir.path().join("storage.json"), "IDR");

        let mut first = Session::open(&config)?;
        first.add(&ProductId::from("1"))?;
        first.add(&ProductId::from("3"))?;
        first.close();

        let second = Session::open(&config)?;

        assert_eq!(second.store().item_count(), 2);
        assert_eq!(second.store().total(), 3_000_000);

        Ok(())
    }

    #[test]
    fn currency_must_match_catalog() -> TestResult {
        let dir = tempdir()?;
        let config = store_config(dir.path().join("storage.json"), "GBP");

        assert!(matches!(
            Session::open(&config),
            Err(AppError::CurrencyMismatch {
                catalog: "IDR",
                configured: "GBP"
            })
        ));

        Ok(())
    }
}
