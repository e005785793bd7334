//! Receipt

use std::io;

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{cart::Cart, rentals::RentalQuote};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Writing to the output failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Writes the cart as a table of lines followed by the total.
///
/// # Errors
///
/// Returns a [`ReceiptError`] if the output cannot be written.
pub fn write_cart(
    mut out: impl io::Write,
    cart: &Cart,
    currency: &'static Currency,
) -> Result<(), ReceiptError> {
    if cart.is_empty() {
        writeln!(out, "Your cart is empty.")?;
        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["", "Item", "Price", "Qty", "Line Total"]);

    for (idx, item) in cart.iter().enumerate() {
        builder.push_record([
            format!("#{:<3}", idx + 1),
            format!("{} ({})", item.name(), item.product_id()),
            money(item.unit_price().amount(), currency),
            item.quantity().to_string(),
            money(item.line_total(), currency),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..5), Alignment::right());

    writeln!(out, "\n{table}")?;
    writeln!(out, " Items: {}", cart.item_count())?;
    writeln!(out, " Total: {}", money(cart.total(), currency))?;

    Ok(())
}

/// Writes a rental quote as a short summary.
///
/// # Errors
///
/// Returns a [`ReceiptError`] if the output cannot be written.
pub fn write_quote(
    mut out: impl io::Write,
    quote: &RentalQuote,
    currency: &'static Currency,
) -> Result<(), ReceiptError> {
    let end = quote
        .end_date
        .map_or_else(|| "-".to_string(), |date| date.to_string());

    writeln!(out, " Start:      {}", quote.start_date)?;
    writeln!(out, " End:        {end}")?;
    writeln!(out, " Days:       {}", quote.days)?;
    writeln!(out, " Per day:    {}", money(quote.unit_price.amount(), currency))?;
    writeln!(out, " Quantity:   {}", quote.quantity)?;
    writeln!(out, " Total:      {}", money(quote.total_price, currency))?;

    Ok(())
}

/// Formats `amount` in `currency`, rounded to the currency's minor unit.
fn money(amount: Decimal, currency: &'static Currency) -> String {
    let minor_units = 10_u64
        .checked_pow(currency.exponent)
        .map(Decimal::from)
        .and_then(|scale| amount.checked_mul(scale))
        .and_then(|value| value.round_dp(0).to_i64());

    match minor_units {
        Some(minor_units) => Money::from_minor(minor_units, currency).to_string(),
        None => format!("{amount} {}", currency.iso_alpha_code),
    }
}
