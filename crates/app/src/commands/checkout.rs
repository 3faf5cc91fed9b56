//! `checkout` command

use std::io::Write;

use clap::Args;

use storefront::{
    checkout::{CheckoutField, CheckoutForm, FieldValue, OrderQuote},
    storage::KeyValueStorage,
};

use crate::{errors::AppError, session::Session};

/// Checkout form input.
#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    /// Recipient name
    #[arg(long)]
    pub name: String,

    /// Contact phone number
    #[arg(long)]
    pub phone: String,

    /// Delivery address
    #[arg(long)]
    pub address: String,

    /// Payment method (transfer, cod, ewallet)
    #[arg(long)]
    pub payment_method: String,

    /// Order notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Custom field value as NAME=VALUE; repeat for several fields
    #[arg(long = "field", value_name = "NAME=VALUE", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,
}

impl CheckoutArgs {
    fn to_form(&self) -> CheckoutForm {
        CheckoutForm {
            name: self.name.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            notes: self.notes.clone(),
            payment_method: self.payment_method.clone(),
            custom: self.fields.iter().cloned().collect(),
        }
    }
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got {raw:?}")),
    }
}

/// Validate the form against the standard fields and print the quote. No order is placed.
pub(super) fn run<S, W>(
    args: &CheckoutArgs,
    session: &Session<S>,
    out: &mut W,
) -> Result<(), AppError>
where
    S: KeyValueStorage,
    W: Write,
{
    let quote = OrderQuote::for_cart(session.store().cart(), session.shipping_cost())?;
    let checkout = args.to_form().validate(&CheckoutField::standard_fields())?;

    writeln!(out, "Name:     {}", checkout.name)?;
    writeln!(out, "Phone:    {}", checkout.phone)?;
    writeln!(out, "Address:  {}", checkout.address)?;
    writeln!(out, "Payment:  {}", checkout.payment_method)?;

    if let Some(notes) = &checkout.notes {
        writeln!(out, "Notes:    {notes}")?;
    }

    for (name, value) in &checkout.custom {
        match value {
            FieldValue::Text(text) | FieldValue::Choice(text) => writeln!(out, "{name}: {text}")?,
            FieldValue::Date(date) => writeln!(out, "{name}: {date}")?,
            FieldValue::Time(time) => writeln!(out, "{name}: {}", time.strftime("%H:%M"))?,
        }
    }

    writeln!(out, "Items:    {}", quote.item_count)?;
    writeln!(out, "Subtotal: {}", session.format(quote.subtotal))?;
    writeln!(out, "Shipping: {}", session.format(quote.shipping))?;
    writeln!(out, "Total:    {}", session.format(quote.total))?;

    Ok(())
}
