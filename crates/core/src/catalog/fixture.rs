//! Catalog Fixtures

use std::io;

use rusty_money::iso::Currency;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    money::{MoneyError, parse_price},
    products::{Category, Product},
};

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading the fixture file
    #[error("failed to read catalog file: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing error
    #[error("failed to parse catalog YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Price could not be parsed
    #[error("invalid price for product {product}: {source}")]
    Price {
        /// Offending product id
        product: String,
        /// Underlying parse failure
        #[source]
        source: MoneyError,
    },

    /// Products priced in different currencies
    #[error("currency mismatch: expected {expected}, product {product} uses {found}")]
    CurrencyMismatch {
        /// Product id
        product: String,
        /// Currency of the first product
        expected: &'static str,
        /// Currency of this product
        found: &'static str,
    },

    /// Same product id defined twice
    #[error("duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Same category id defined twice
    #[error("duplicate category id: {0}")]
    DuplicateCategory(String),

    /// Product references a category that does not exist
    #[error("product {product} references unknown category {category}")]
    UnknownCategory {
        /// Product id
        product: String,
        /// Missing category id
        category: String,
    },
}

/// Wrapper for a catalog in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Categories
    #[serde(default)]
    pub categories: Vec<CategoryFixture>,

    /// Products
    pub products: Vec<ProductFixture>,
}

/// Category Fixture
#[derive(Debug, Deserialize)]
pub struct CategoryFixture {
    /// Category id
    pub id: String,

    /// Category name
    pub name: String,

    /// Category description
    #[serde(default)]
    pub description: Option<String>,

    /// Sort order
    #[serde(default)]
    pub sort_order: u32,

    /// Whether the category is shown
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product id
    pub id: String,

    /// Product name
    pub name: String,

    /// Product description
    #[serde(default)]
    pub description: String,

    /// Product price (e.g., "25000 IDR")
    pub price: String,

    /// Image reference
    #[serde(default)]
    pub image: Option<String>,

    /// Category id
    pub category: String,

    /// Whether the product is for sale
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl From<CategoryFixture> for Category {
    fn from(fixture: CategoryFixture) -> Self {
        Category {
            id: fixture.id.into(),
            name: fixture.name,
            description: fixture.description,
            image_url: None,
            sort_order: fixture.sort_order,
            is_active: fixture.active,
        }
    }
}

impl ProductFixture {
    /// Convert into a product, returning the currency its price was written in.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Price`] if the price string is invalid.
    pub fn into_product(self) -> Result<(Product, &'static Currency), CatalogError> {
        let (price, currency) = parse_price(&self.price).map_err(|source| CatalogError::Price {
            product: self.id.clone(),
            source,
        })?;

        let product = Product {
            id: self.id.into(),
            name: self.name,
            description: self.description,
            price,
            image_url: self.image,
            category_id: self.category.into(),
            is_active: self.active,
        };

        Ok((product, currency))
    }
}
