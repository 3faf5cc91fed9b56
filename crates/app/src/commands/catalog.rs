//! `catalog` command

use std::io::Write;

use storefront::{catalog::ProductCatalog, storage::KeyValueStorage};

use crate::{errors::AppError, session::Session};

/// Print active products grouped by category.
pub(super) fn list<S, W>(session: &Session<S>, out: &mut W) -> Result<(), AppError>
where
    S: KeyValueStorage,
    W: Write,
{
    let catalog = session.catalog();

    for category in catalog.categories().iter().filter(|category| category.is_active) {
        let products = catalog.products_in_category(&category.id);

        if products.is_empty() {
            continue;
        }

        writeln!(out, "{}", category.name)?;

        for product in products {
            writeln!(
                out,
                "  {:<4} {:<28} {}",
                product.id.as_str(),
                product.name,
                session.format(product.price)
            )?;
        }
    }

    Ok(())
}
