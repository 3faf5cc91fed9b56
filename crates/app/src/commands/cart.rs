//! `cart` commands

use std::io::Write;

use storefront::{cart::CartChange, storage::KeyValueStorage};

use crate::{commands::CartCommand, errors::AppError, session::Session};

pub(super) fn run<S, W>(
    command: CartCommand,
    session: &mut Session<S>,
    out: &mut W,
) -> Result<(), AppError>
where
    S: KeyValueStorage,
    W: Write,
{
    let change = match command {
        CartCommand::Show => return show(session, out),
        CartCommand::Add(args) => session.add(&args.product_id)?,
        CartCommand::Remove(args) => session.store_mut().remove(&args.product_id),
        CartCommand::Set {
            product_id,
            quantity,
        } => session.store_mut().set_quantity(&product_id, quantity),
        CartCommand::Clear => session.store_mut().clear(),
    };

    report(&change, out)?;
    show(session, out)
}

fn report<W: Write>(change: &CartChange, out: &mut W) -> Result<(), AppError> {
    match change {
        CartChange::Added(product_id) => writeln!(out, "added {product_id}")?,
        CartChange::Incremented {
            product_id,
            quantity,
        } => writeln!(out, "{product_id} now x{quantity}")?,
        CartChange::Removed(product_id) => writeln!(out, "removed {product_id}")?,
        CartChange::QuantitySet {
            product_id,
            quantity,
        } => writeln!(out, "{product_id} set to x{quantity}")?,
        CartChange::Cleared => writeln!(out, "cart cleared")?,
        CartChange::Unchanged => writeln!(out, "cart unchanged")?,
    }

    Ok(())
}

fn show<S, W>(session: &Session<S>, out: &mut W) -> Result<(), AppError>
where
    S: KeyValueStorage,
    W: Write,
{
    let store = session.store();
    let cart = store.cart();

    if cart.is_empty() {
        writeln!(out, "cart is empty")?;
        return Ok(());
    }

    for line in cart.lines() {
        let product = line.product();

        writeln!(
            out,
            "  {:<4} {:<28} x{:<3} {}",
            product.id.as_str(),
            product.name,
            line.quantity(),
            session.format(line.line_total())
        )?;
    }

    writeln!(
        out,
        "{} item(s), total {}",
        store.item_count(),
        session.format(store.total())
    )?;

    Ok(())
}
