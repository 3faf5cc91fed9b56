//! Cart persistence format

use rustc_hash::FxHashSet;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    products::{Product, ProductId},
    storage::KeyValueStorage,
};

use super::{Cart, CartLine};

/// Storage slot the cart is persisted under.
pub const STORAGE_KEY: &str = "cart";

/// Reasons a persisted cart was rejected.
#[derive(Debug, Error)]
pub enum CartDecodeError {
    /// Not JSON, or not the expected shape.
    #[error("persisted cart is malformed")]
    Malformed(#[from] serde_json::Error),

    /// A line carried a zero quantity.
    #[error("persisted cart line for product {0} has zero quantity")]
    ZeroQuantity(ProductId),

    /// Two lines referenced the same product.
    #[error("persisted cart has more than one line for product {0}")]
    DuplicateLine(ProductId),
}

#[derive(Debug, Deserialize)]
struct StoredCart {
    items: Vec<StoredLine>,

    #[serde(default)]
    total: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct StoredLine {
    product: Product,
    quantity: u32,
}

impl Cart {
    /// Serialize the cart into its persisted JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse and validate a persisted cart.
    ///
    /// The stored total is never trusted; it is recomputed from the lines.
    ///
    /// # Errors
    ///
    /// Returns a [`CartDecodeError`] if the content is malformed or violates a cart invariant.
    pub fn from_json(json: &str) -> Result<Self, CartDecodeError> {
        let stored: StoredCart = serde_json::from_str(json)?;

        let mut seen = FxHashSet::default();

        let lines = stored
            .items
            .into_iter()
            .map(|StoredLine { product, quantity }| {
                if quantity == 0 {
                    return Err(CartDecodeError::ZeroQuantity(product.id));
                }

                if !seen.insert(product.id.clone()) {
                    return Err(CartDecodeError::DuplicateLine(product.id));
                }

                Ok(CartLine { product, quantity })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let cart = Cart::from_lines(lines);

        if let Some(stored_total) = stored.total.filter(|total| *total != cart.total()) {
            debug!(
                stored_total,
                computed_total = cart.total(),
                "persisted cart total disagreed with its lines"
            );
        }

        Ok(cart)
    }
}

/// Read the persisted cart, falling back to an empty one on any failure.
pub(super) fn load<S: KeyValueStorage>(storage: &S) -> Cart {
    let json = match storage.get(STORAGE_KEY) {
        Ok(Some(json)) => json,
        Ok(None) => return Cart::new(),
        Err(error) => {
            warn!(error = %error, "failed to read persisted cart; starting empty");

            return Cart::new();
        }
    };

    match Cart::from_json(&json) {
        Ok(cart) => cart,
        Err(error) => {
            warn!(error = %error, "discarding unreadable persisted cart; starting empty");

            Cart::new()
        }
    }
}

/// Write the cart to its storage slot. Failures are logged and otherwise ignored.
pub(super) fn save<S: KeyValueStorage>(storage: &S, cart: &Cart) {
    let json = match cart.to_json() {
        Ok(json) => json,
        Err(error) => {
            warn!(error = %error, "failed to serialize cart");

            return;
        }
    };

    if let Err(error) = storage.set(STORAGE_KEY, &json) {
        warn!(error = %error, "failed to persist cart");
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::storage::{MemoryStorage, MockKeyValueStorage, StorageError};

    use super::*;

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        let nasi = Product::new("1", "Nasi Goreng Spesial", 25_000, "1");
        let teh = Product::new("3", "Es Teh Manis", 5_000, "2");

        cart.add(&nasi);
        cart.add(&nasi);
        cart.add(&teh);

        cart
    }

    #[test]
    fn json_round_trip_preserves_lines_and_total() -> TestResult {
        let cart = sample_cart();

        let restored = Cart::from_json(&cart.to_json()?)?;

        assert_eq!(restored, cart);
        assert_eq!(restored.total(), 55_000);

        Ok(())
    }

    #[test]
    fn persisted_shape_matches_local_storage_format() -> TestResult {
        let value: serde_json::Value = serde_json::from_str(&sample_cart().to_json()?)?;

        assert_eq!(value["total"], 55_000);
        assert_eq!(value["items"][0]["quantity"], 2);
        assert_eq!(value["items"][0]["product"]["id"], "1");

        Ok(())
    }

    #[test]
    fn stale_total_is_recomputed() -> TestResult {
        let cart = Cart::from_json(
            r#"{"items":[{"product":{"id":"1","name":"Nasi","price":25000,"category_id":"1"},"quantity":2}],"total":1}"#,
        )?;

        assert_eq!(cart.total(), 50_000);

        Ok(())
    }

    #[test]
    fn missing_total_is_accepted() -> TestResult {
        let cart = Cart::from_json(
            r#"{"items":[{"product":{"id":"1","name":"Nasi","price":25000,"category_id":"1"},"quantity":1}]}"#,
        )?;

        assert_eq!(cart.total(), 25_000);

        Ok(())
    }

    #[test]
    fn rejects_non_numeric_quantity() {
        let result = Cart::from_json(
            r#"{"items":[{"product":{"id":"1","name":"Nasi","price":25000,"category_id":"1"},"quantity":"two"}],"total":0}"#,
        );

        assert!(matches!(result, Err(CartDecodeError::Malformed(_))));
    }

    #[test]
    fn rejects_negative_quantity() {
        let result = Cart::from_json(
            r#"{"items":[{"product":{"id":"1","name":"Nasi","price":25000,"category_id":"1"},"quantity":-2}],"total":0}"#,
        );

        assert!(matches!(result, Err(CartDecodeError::Malformed(_))));
    }

    #[test]
    fn rejects_zero_quantity() {
        let result = Cart::from_json(
            r#"{"items":[{"product":{"id":"1","name":"Nasi","price":25000,"category_id":"1"},"quantity":0}],"total":0}"#,
        );

        assert!(matches!(result, Err(CartDecodeError::ZeroQuantity(id)) if id.as_str() == "1"));
    }

    #[test]
    fn rejects_duplicate_lines() {
        let line = r#"{"product":{"id":"1","name":"Nasi","price":25000,"category_id":"1"},"quantity":1}"#;
        let json = format!(r#"{{"items":[{line},{line}],"total":50000}}"#);

        assert!(matches!(
            Cart::from_json(&json),
            Err(CartDecodeError::DuplicateLine(_))
        ));
    }

    #[test]
    fn load_falls_back_to_empty_on_garbage() -> TestResult {
        let storage = MemoryStorage::new();
        storage.set(STORAGE_KEY, "{not json")?;

        assert_eq!(load(&storage), Cart::new());

        Ok(())
    }

    #[test]
    fn load_falls_back_to_empty_on_read_failure() {
        let mut storage = MockKeyValueStorage::new();
        storage
            .expect_get()
            .returning(|_| Err(StorageError::Unavailable("quota".to_string())));

        assert_eq!(load(&storage), Cart::new());
    }

    #[test]
    fn save_swallows_write_failures() {
        let mut storage = MockKeyValueStorage::new();
        storage
            .expect_set()
            .times(1)
            .returning(|_, _| Err(StorageError::Unavailable("quota".to_string())));

        save(&storage, &sample_cart());
    }
}
