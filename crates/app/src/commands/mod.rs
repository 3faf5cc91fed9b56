//! CLI commands
//!
//! Handlers write their output to any [`Write`] so they can be exercised without a terminal.

use std::io::Write;

use clap::{Args, Subcommand};

use storefront::{products::ProductId, storage::FileStorage};

use crate::{config::store::StoreConfig, errors::AppError, session::Session};

mod account;
mod cart;
mod catalog;
mod checkout;

pub(crate) use account::AccountCommand;
pub(crate) use checkout::CheckoutArgs;

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List products currently offered for sale
    Catalog,

    /// Inspect or change the cart
    Cart {
        #[command(subcommand)]
        command: CartCommand,
    },

    /// Validate checkout details and show the order quote
    Checkout(CheckoutArgs),

    /// Account commands
    Account {
        #[command(subcommand)]
        command: AccountCommand,
    },
}

/// Cart commands.
#[derive(Debug, Subcommand)]
pub(crate) enum CartCommand {
    /// Show cart lines and total
    Show,

    /// Add one unit of a product
    Add(ProductArgs),

    /// Remove a product's line
    Remove(ProductArgs),

    /// Replace a line's quantity; zero or less removes the line
    Set {
        /// Product identifier
        product_id: ProductId,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i32,
    },

    /// Empty the cart
    Clear,
}

/// A single product argument.
#[derive(Debug, Args)]
pub(crate) struct ProductArgs {
    /// Product identifier
    pub product_id: ProductId,
}

/// Run `command`, opening a cart session first when it needs one.
///
/// # Errors
///
/// Returns an error if the session cannot be opened, the command is rejected, or output
/// cannot be written.
pub(crate) async fn execute<W: Write>(
    command: Command,
    config: &StoreConfig,
    out: &mut W,
) -> Result<(), AppError> {
    match command {
        Command::Catalog => with_session(config, |session| catalog::list(session, out)),
        Command::Cart { command } => with_session(config, |session| cart::run(command, session, out)),
        Command::Checkout(args) => {
            with_session(config, |session| checkout::run(&args, session, out))
        }
        Command::Account { command } => account::run(command, out).await,
    }
}

fn with_session<F>(config: &StoreConfig, command: F) -> Result<(), AppError>
where
    F: FnOnce(&mut Session<FileStorage>) -> Result<(), AppError>,
{
    let mut session = Session::open(config)?;
    let result = command(&mut session);

    session.close();

    result
}
