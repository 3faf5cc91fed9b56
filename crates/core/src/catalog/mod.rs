//! Catalog
//!
//! Read-only product and category lookup. The cart never talks to the catalog itself; hosts
//! resolve a [`ProductId`] here and hand the [`Product`] to the cart store.

use crate::products::{Category, CategoryId, Product, ProductId};

mod fixture;
mod static_catalog;

pub use fixture::{CatalogError, CatalogFixture, CategoryFixture, ProductFixture};
pub use static_catalog::StaticCatalog;

/// Synchronous read access to products and categories.
pub trait ProductCatalog {
    /// All products, active or not, in catalog order.
    fn products(&self) -> &[Product];

    /// All categories, ordered by `sort_order`.
    fn categories(&self) -> &[Category];

    /// Look up a product by identifier.
    fn product(&self, id: &ProductId) -> Option<&Product>;

    /// Products currently offered for sale.
    fn active_products(&self) -> Vec<&Product> {
        self.products()
            .iter()
            .filter(|product| product.is_active)
            .collect()
    }

    /// Active products in `category`.
    fn products_in_category(&self, category: &CategoryId) -> Vec<&Product> {
        self.products()
            .iter()
            .filter(|product| product.is_active && &product.category_id == category)
            .collect()
    }
}
