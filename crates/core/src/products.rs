//! Products

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Category identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Create a category identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CategoryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Product
///
/// Supplied by the catalog and copied into cart lines as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Longer description shown on product cards
    #[serde(default)]
    pub description: String,

    /// Unit price in currency minor units
    pub price: u64,

    /// Optional image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Owning category
    pub category_id: CategoryId,

    /// Whether the product is offered for sale
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

impl Product {
    /// Create an active product with no description or image.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: u64,
        category_id: impl Into<CategoryId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            image_url: None,
            category_id: category_id.into(),
            is_active: true,
        }
    }
}

/// Category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category identifier
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Display ordering, ascending
    #[serde(default)]
    pub sort_order: u32,

    /// Whether the category is shown
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

fn active_by_default() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn product_id_serializes_as_plain_string() -> TestResult {
        let json = serde_json::to_string(&ProductId::from("nasi-goreng"))?;

        assert_eq!(json, "\"nasi-goreng\"");

        Ok(())
    }

    #[test]
    fn product_defaults_missing_optional_fields() -> TestResult {
        let product: Product = serde_json::from_str(
            r#"{"id":"1","name":"Es Teh Manis","price":5000,"category_id":"2"}"#,
        )?;

        assert_eq!(product, Product::new("1", "Es Teh Manis", 5000, "2"));

        Ok(())
    }

    #[test]
    fn product_ignores_unknown_fields() -> TestResult {
        let product: Product = serde_json::from_str(
            r#"{"id":"1","name":"Jus Jeruk","price":12000,"category_id":"2","created_at":"2025-01-01"}"#,
        )?;

        assert_eq!(product.price, 12000);

        Ok(())
    }

    #[test]
    fn negative_price_is_rejected() {
        let result = serde_json::from_str::<Product>(
            r#"{"id":"1","name":"Broken","price":-1,"category_id":"2"}"#,
        );

        assert!(result.is_err(), "negative prices must not deserialize");
    }
}
