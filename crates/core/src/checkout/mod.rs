//! Checkout
//!
//! Validation for the checkout form and the price quote shown next to it. Placing the order
//! is the order service's job and lives outside this crate.

use thiserror::Error;

mod fields;
mod form;
mod quote;

pub use fields::{CheckoutField, FieldType, FieldValue};
pub use form::{CheckoutForm, PaymentMethod, ValidatedCheckout};
pub use quote::{DEFAULT_SHIPPING_COST, OrderQuote};

/// Checkout validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// A required base field was blank.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Payment method is not one the store offers.
    #[error("unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    /// A required custom field was blank or absent.
    #[error("missing required field: {0}")]
    MissingCustomField(String),

    /// A value was supplied for a field the schema does not declare.
    #[error("unknown field: {0}")]
    UndeclaredField(String),

    /// Select value outside the declared options.
    #[error("invalid option {value:?} for field {field}")]
    InvalidOption {
        /// Field name
        field: String,
        /// Rejected value
        value: String,
    },

    /// Date not in `YYYY-MM-DD` form.
    #[error("invalid date {value:?} for field {field}")]
    InvalidDate {
        /// Field name
        field: String,
        /// Rejected value
        value: String,
    },

    /// Time not in `HH:MM` form.
    #[error("invalid time {value:?} for field {field}")]
    InvalidTime {
        /// Field name
        field: String,
        /// Rejected value
        value: String,
    },

    /// Nothing to check out.
    #[error("cart is empty")]
    EmptyCart,
}
