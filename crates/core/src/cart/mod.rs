//! Cart
//!
//! A [`Cart`] is an ordered list of product lines plus a derived total. Only the
//! [`CartStore`] mutates it; everything else reads snapshots.

use serde::Serialize;

use crate::products::{Product, ProductId};

mod persistence;
mod store;

pub use persistence::{CartDecodeError, STORAGE_KEY};
pub use store::{CartStore, ListenerKey};

/// One product and how many of it are in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    product: Product,
    quantity: u32,
}

impl CartLine {
    /// The product copied into this line.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Quantity, always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price multiplied by quantity, in minor units.
    pub fn line_total(&self) -> u64 {
        self.product.price.saturating_mul(u64::from(self.quantity))
    }
}

/// Outcome of a cart command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    /// A new line was appended with quantity one.
    Added(ProductId),

    /// An existing line's quantity went up by one.
    Incremented {
        /// Product on the line
        product_id: ProductId,
        /// Quantity after the increment
        quantity: u32,
    },

    /// A line was deleted.
    Removed(ProductId),

    /// An existing line's quantity was replaced.
    QuantitySet {
        /// Product on the line
        product_id: ProductId,
        /// New quantity
        quantity: u32,
    },

    /// All lines were dropped.
    Cleared,

    /// Nothing changed.
    Unchanged,
}

impl CartChange {
    /// Whether the command altered the cart.
    pub fn is_changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Shopping cart snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    items: Vec<CartLine>,
    total: u64,
}

impl Cart {
    /// An empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.items
    }

    /// The line holding `product_id`, if any.
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.items.iter().find(|line| &line.product.id == product_id)
    }

    /// Sum of price × quantity over all lines, in minor units.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Sum of quantities over all lines.
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|line| u64::from(line.quantity))
            .fold(0, u64::saturating_add)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn add(&mut self, product: &Product) -> CartChange {
        let change = if let Some(line) = self.line_mut(&product.id) {
            line.quantity = line.quantity.saturating_add(1);

            CartChange::Incremented {
                product_id: product.id.clone(),
                quantity: line.quantity,
            }
        } else {
            self.items.push(CartLine {
                product: product.clone(),
                quantity: 1,
            });

            CartChange::Added(product.id.clone())
        };

        self.recompute_total();

        change
    }

    pub(crate) fn remove(&mut self, product_id: &ProductId) -> CartChange {
        let before = self.items.len();

        self.items.retain(|line| &line.product.id != product_id);

        if self.items.len() == before {
            return CartChange::Unchanged;
        }

        self.recompute_total();

        CartChange::Removed(product_id.clone())
    }

    /// Any quantity of zero or below removes the line.
    pub(crate) fn set_quantity(&mut self, product_id: &ProductId, quantity: i32) -> CartChange {
        if quantity <= 0 {
            return self.remove(product_id);
        }

        let quantity = quantity.unsigned_abs();

        let Some(line) = self.line_mut(product_id) else {
            return CartChange::Unchanged;
        };

        if line.quantity == quantity {
            return CartChange::Unchanged;
        }

        line.quantity = quantity;

        self.recompute_total();

        CartChange::QuantitySet {
            product_id: product_id.clone(),
            quantity,
        }
    }

    pub(crate) fn clear(&mut self) -> CartChange {
        if self.is_empty() {
            return CartChange::Unchanged;
        }

        self.items.clear();
        self.recompute_total();

        CartChange::Cleared
    }

    /// Build a cart from already validated lines.
    pub(crate) fn from_lines(items: Vec<CartLine>) -> Self {
        let mut cart = Self { items, total: 0 };

        cart.recompute_total();

        cart
    }

    fn line_mut(&mut self, product_id: &ProductId) -> Option<&mut CartLine> {
        self.items
            .iter_mut()
            .find(|line| &line.product.id == product_id)
    }

    fn recompute_total(&mut self) {
        self.total = total_of(&self.items);
    }
}

fn total_of(lines: &[CartLine]) -> u64 {
    lines
        .iter()
        .map(CartLine::line_total)
        .fold(0, u64::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: u64) -> Product {
        Product::new(id, format!("Product {id}"), price, "1")
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn adding_same_product_twice_increments_one_line() {
        let mut cart = Cart::new();
        let a = product("a", 25_000);

        assert_eq!(cart.add(&a), CartChange::Added(a.id.clone()));
        assert_eq!(
            cart.add(&a),
            CartChange::Incremented {
                product_id: a.id.clone(),
                quantity: 2
            }
        );

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.line(&a.id).map(CartLine::quantity), Some(2));
        assert_eq!(cart.total(), 50_000);
    }

    #[test]
    fn lines_keep_insertion_order() {
        let mut cart = Cart::new();

        cart.add(&product("b", 1));
        cart.add(&product("a", 1));
        cart.add(&product("b", 1));

        let ids: Vec<&str> = cart
            .lines()
            .iter()
            .map(|line| line.product().id.as_str())
            .collect();

        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn remove_unknown_product_is_unchanged() {
        let mut cart = Cart::new();
        cart.add(&product("a", 100));

        assert_eq!(cart.remove(&ProductId::from("zzz")), CartChange::Unchanged);
        assert_eq!(cart.total(), 100);
    }

    #[test]
    fn set_quantity_zero_and_negative_remove_the_line() {
        for quantity in [0, -1, -3, i32::MIN] {
            let mut cart = Cart::new();
            let a = product("a", 100);
            cart.add(&a);

            assert_eq!(
                cart.set_quantity(&a.id, quantity),
                CartChange::Removed(a.id.clone()),
                "quantity {quantity} should remove the line"
            );
            assert!(cart.is_empty());
            assert_eq!(cart.total(), 0);
        }
    }

    #[test]
    fn set_quantity_on_unknown_product_does_not_create_line() {
        let mut cart = Cart::new();

        assert_eq!(
            cart.set_quantity(&ProductId::from("a"), 5),
            CartChange::Unchanged
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_to_current_value_is_unchanged() {
        let mut cart = Cart::new();
        let a = product("a", 100);
        cart.add(&a);

        assert_eq!(cart.set_quantity(&a.id, 1), CartChange::Unchanged);
    }

    #[test]
    fn clear_on_empty_cart_is_unchanged() {
        let mut cart = Cart::new();

        assert_eq!(cart.clear(), CartChange::Unchanged);
    }

    #[test]
    fn total_saturates_instead_of_overflowing() {
        let mut cart = Cart::new();
        let expensive = product("a", u64::MAX);
        cart.add(&expensive);
        cart.add(&expensive);

        assert_eq!(cart.total(), u64::MAX);
    }

    #[test]
    fn total_tracks_every_mutation() {
        let mut cart = Cart::new();
        let products = [product("a", 199), product("b", 1_000), product("c", 7)];

        let steps: [(usize, i32); 8] = [
            (0, 3),
            (1, 2),
            (2, 10),
            (0, -1),
            (1, 7),
            (2, 0),
            (0, 4),
            (1, 1),
        ];

        for (index, quantity) in steps {
            let Some(product) = products.get(index) else {
                continue;
            };

            cart.add(product);
            cart.set_quantity(&product.id, quantity);

            let expected: u64 = cart
                .lines()
                .iter()
                .map(|line| line.product().price * u64::from(line.quantity()))
                .sum();

            assert_eq!(cart.total(), expected);
        }
    }
}
