//! Money
//!
//! Prices are carried as integer minor units everywhere in the crate. This module converts
//! between those integers, human-written fixture amounts and displayable [`Money`] values.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use thiserror::Error;

/// Currency used when nothing else is configured.
pub const DEFAULT_CURRENCY: &str = "IDR";

/// Errors raised while resolving currencies or parsing amounts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    /// Unknown ISO currency code
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Amount was not in the `AMOUNT CURRENCY` format or out of range
    #[error("invalid price format: {0}")]
    InvalidPrice(String),
}

/// Look up an ISO currency by its alpha code.
///
/// # Errors
///
/// Returns [`MoneyError::UnknownCurrency`] if the code is not an ISO 4217 currency.
pub fn currency(code: &str) -> Result<&'static Currency, MoneyError> {
    iso::find(code.trim()).ok_or_else(|| MoneyError::UnknownCurrency(code.to_string()))
}

/// Wrap an amount of minor units as displayable money.
pub fn to_money(minor_units: u64, currency: &'static Currency) -> Money<'static, Currency> {
    Money::from_minor(i64::try_from(minor_units).unwrap_or(i64::MAX), currency)
}

/// Format an amount of minor units in the given currency.
pub fn format_minor(minor_units: u64, currency: &'static Currency) -> String {
    to_money(minor_units, currency).to_string()
}

/// Parse a price string (e.g. `"25000 IDR"` or `"2.99 GBP"`) into minor units and currency.
///
/// # Errors
///
/// Returns an error if the string is not `AMOUNT CURRENCY`, the amount is negative or does
/// not parse, or the currency code is unknown.
pub fn parse_price(s: &str) -> Result<(u64, &'static Currency), MoneyError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(code), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(MoneyError::InvalidPrice(format!(
            "expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let currency = currency(code)?;

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| MoneyError::InvalidPrice(s.to_string()))?;

    let scale = 10_i64
        .checked_pow(currency.exponent)
        .ok_or_else(|| MoneyError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::from(scale))
        .and_then(|value| value.round_dp(0).to_u64())
        .ok_or_else(|| MoneyError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, currency))
}
