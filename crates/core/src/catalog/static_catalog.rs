//! Static Catalog

use std::{fs, path::Path};

use rustc_hash::{FxHashMap, FxHashSet};
use rusty_money::iso::Currency;
use tracing::debug;

use crate::products::{Category, Product, ProductId};

use super::{
    ProductCatalog,
    fixture::{CatalogError, CatalogFixture},
};

const DEMO_CATALOG: &str = include_str!("../../fixtures/catalog.yml");

/// In-memory catalog loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    index: FxHashMap<ProductId, usize>,
    currency: Option<&'static Currency>,
}

impl StaticCatalog {
    /// Build a catalog from products and categories.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate ids or when a product references a missing category.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut category_ids = FxHashSet::default();

        for category in &categories {
            if !category_ids.insert(category.id.clone()) {
                return Err(CatalogError::DuplicateCategory(category.id.to_string()));
            }
        }

        let mut index = FxHashMap::default();

        for (position, product) in products.iter().enumerate() {
            if index.insert(product.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateProduct(product.id.to_string()));
            }

            if !categories.is_empty() && !category_ids.contains(&product.category_id) {
                return Err(CatalogError::UnknownCategory {
                    product: product.id.to_string(),
                    category: product.category_id.to_string(),
                });
            }
        }

        let mut categories = categories;
        categories.sort_by_key(|category| category.sort_order);

        Ok(Self {
            products,
            categories,
            index,
            currency: None,
        })
    }

    /// Parse a catalog from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid, a price cannot be parsed, prices use more than
    /// one currency, or the catalog fails the checks in [`StaticCatalog::new`].
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

        let mut currency: Option<&'static Currency> = None;
        let mut products = Vec::with_capacity(fixture.products.len());

        for product_fixture in fixture.products {
            let (product, product_currency) = product_fixture.into_product()?;

            match currency {
                None => currency = Some(product_currency),
                Some(expected) if expected != product_currency => {
                    return Err(CatalogError::CurrencyMismatch {
                        product: product.id.to_string(),
                        expected: expected.iso_alpha_code,
                        found: product_currency.iso_alpha_code,
                    });
                }
                Some(_) => {}
            }

            products.push(product);
        }

        let categories = fixture.categories.into_iter().map(Category::from).collect();

        let mut catalog = Self::new(products, categories)?;
        catalog.currency = currency;

        debug!(
            products = catalog.products.len(),
            categories = catalog.categories.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails [`StaticCatalog::from_yaml`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let yaml = fs::read_to_string(path)?;

        Self::from_yaml(&yaml)
    }

    /// The bundled demo menu.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled fixture is invalid.
    pub fn demo() -> Result<Self, CatalogError> {
        Self::from_yaml(DEMO_CATALOG)
    }

    /// Currency the fixture prices were written in, if loaded from YAML.
    pub fn currency(&self) -> Option<&'static Currency> {
        self.currency
    }
}

impl ProductCatalog for StaticCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn product(&self, id: &ProductId) -> Option<&Product> {
        self.index
            .get(id)
            .and_then(|position| self.products.get(*position))
    }
}
