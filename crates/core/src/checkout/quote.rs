//! Order quote

use crate::cart::Cart;

use super::CheckoutError;

/// Flat delivery charge in minor units, Rp 10.000.
pub const DEFAULT_SHIPPING_COST: u64 = 1_000_000;

/// Price breakdown shown beside the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderQuote {
    /// Cart total
    pub subtotal: u64,

    /// Delivery charge
    pub shipping: u64,

    /// Subtotal plus shipping
    pub total: u64,

    /// Units in the cart
    pub item_count: u64,
}

impl OrderQuote {
    /// Quote the cart with a flat `shipping` charge.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if the cart has no lines.
    pub fn for_cart(cart: &Cart, shipping: u64) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        Ok(Self {
            subtotal: cart.total(),
            shipping,
            total: cart.total().saturating_add(shipping),
            item_count: cart.item_count(),
        })
    }
}
