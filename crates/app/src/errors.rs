//! CLI errors

use std::io;

use thiserror::Error;

use storefront::{
    auth::{SignInError, SignUpError}, catalog::CatalogError, checkout::CheckoutError, money::MoneyError,
    products::ProductId,
};

/// Errors surfaced to the user before the process exits with status 1.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    /// Catalog could not be loaded.
    #[error("failed to load catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// Configured currency is not an ISO currency.
    #[error(transparent)]
    Currency(#[from] MoneyError),

    /// Catalog prices and configured currency disagree.
    #[error("catalog is priced in {catalog} but the store is configured for {configured}")]
    CurrencyMismatch {
        /// Currency of the catalog fixture
        catalog: &'static str,
        /// Currency from configuration
        configured: &'static str,
    },

    /// Product is not in the catalog.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    /// Product exists but is not offered for sale.
    #[error("product is not available: {0}")]
    InactiveProduct(ProductId),

    /// Checkout form was rejected.
    #[error("checkout failed: {0}")]
    Checkout(#[from] CheckoutError),

    /// Sign-up form or provider rejected the account.
    #[error("sign-up failed: {0}")]
    SignUp(#[from] SignUpError),

    /// Sign-in form or provider rejected the credentials.
    #[error("sign-in failed: {0}")]
    SignIn(#[from] SignInError),

    /// Writing to stdout failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    /// Tracing subscriber could not be installed.
    #[error("failed to initialise tracing subscriber: {0}")]
    TracingSubscriber(#[from] tracing_subscriber::util::TryInitError),
}
