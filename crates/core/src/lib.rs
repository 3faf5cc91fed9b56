//! Storefront
//!
//! Session-side storefront domain: the shopping cart store, its durable storage slot, the
//! product catalog, and the form validation the checkout and auth flows run before calling
//! out to external services.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod money;
pub mod prelude;
pub mod products;
pub mod storage;

mod uuids;

pub use uuids::TypedUuid;
