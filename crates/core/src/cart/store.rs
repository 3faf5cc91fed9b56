//! Cart Store

use std::fmt::{Debug, Formatter, Result as FmtResult};

use rusty_money::{
    Money,
    iso::{self, Currency},
};
use slotmap::{SlotMap, new_key_type};
use tracing::{debug, info};

use crate::{
    money::to_money,
    products::{Product, ProductId},
    storage::KeyValueStorage,
};

use super::{
    Cart, CartChange,
    persistence::{load, save},
};

new_key_type! {
    /// Handle returned by [`CartStore::subscribe`], used to unsubscribe.
    pub struct ListenerKey;
}

type Listener = Box<dyn FnMut(&Cart)>;

/// Owns the session's cart.
///
/// All mutation goes through the commands below. Each command recomputes the total together
/// with the line change, writes the cart to storage and notifies listeners, in that order,
/// before returning. Commands that leave the cart as it was do none of that.
pub struct CartStore<S: KeyValueStorage> {
    cart: Cart,
    storage: S,
    listeners: SlotMap<ListenerKey, Listener>,
    currency: &'static Currency,
}

impl<S: KeyValueStorage> CartStore<S> {
    /// Start a session, hydrating the cart from `storage` when it holds a valid one.
    ///
    /// Never fails: missing or unreadable state yields an empty cart.
    pub fn init(storage: S) -> Self {
        let cart = load(&storage);

        info!(
            lines = cart.len(),
            items = cart.item_count(),
            total = cart.total(),
            "cart store initialised"
        );

        Self {
            cart,
            storage,
            listeners: SlotMap::with_key(),
            currency: iso::IDR,
        }
    }

    /// Use `currency` when presenting totals as money.
    #[must_use]
    pub fn with_currency(mut self, currency: &'static Currency) -> Self {
        self.currency = currency;
        self
    }

    /// End the session, dropping all listeners and handing back the storage backend.
    pub fn dispose(self) -> S {
        debug!(listeners = self.listeners.len(), "cart store disposed");

        self.storage
    }

    /// Current cart snapshot.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current total in minor units.
    pub fn total(&self) -> u64 {
        self.cart.total()
    }

    /// Current total as money in the store's currency.
    pub fn total_money(&self) -> Money<'static, Currency> {
        to_money(self.cart.total(), self.currency)
    }

    /// Currency totals are presented in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Add one unit of `product`, appending a line if it is not in the cart yet.
    pub fn add(&mut self, product: &Product) -> CartChange {
        let change = self.cart.add(product);

        self.commit(change)
    }

    /// Remove the line for `product_id`. Unknown products are ignored.
    pub fn remove(&mut self, product_id: &ProductId) -> CartChange {
        let change = self.cart.remove(product_id);

        self.commit(change)
    }

    /// Replace the quantity on the line for `product_id`.
    ///
    /// A quantity of zero or less removes the line. Unknown products are ignored; this never
    /// creates a line.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i32) -> CartChange {
        let change = self.cart.set_quantity(product_id, quantity);

        self.commit(change)
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> CartChange {
        let change = self.cart.clear();

        self.commit(change)
    }

    /// Register `listener` to receive the cart after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&Cart) + 'static) -> ListenerKey {
        self.listeners.insert(Box::new(listener))
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, key: ListenerKey) -> bool {
        self.listeners.remove(key).is_some()
    }

    fn commit(&mut self, change: CartChange) -> CartChange {
        if !change.is_changed() {
            return change;
        }

        debug!(
            ?change,
            lines = self.cart.len(),
            total = self.cart.total(),
            "cart changed"
        );

        save(&self.storage, &self.cart);

        for listener in self.listeners.values_mut() {
            listener(&self.cart);
        }

        change
    }
}

impl<S: KeyValueStorage + Debug> Debug for CartStore<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("storage", &self.storage)
            .field("listeners", &self.listeners.len())
            .field("currency", &self.currency.iso_alpha_code)
            .finish()
    }
}
