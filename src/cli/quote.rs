//! Rental quote command

use std::io;

use clap::Args;
use jiff::civil::Date;
use rentcart::{
    config::AppConfig,
    prices::Price,
    receipt::write_quote,
    rentals::{StockQuantity, parse_date, quote, today_in},
};

use super::CliError;

#[derive(Debug, Args)]
pub(crate) struct QuoteArgs {
    /// Price per unit per day
    #[arg(long)]
    price: Price,

    /// First day of the rental (YYYY-MM-DD); defaults to today
    #[arg(long)]
    start: Option<Date>,

    /// Last day of the rental (YYYY-MM-DD); invalid dates are ignored
    #[arg(long, default_value = "")]
    end: String,

    /// Units to rent
    #[arg(long, default_value_t = 1)]
    quantity: u32,

    /// Units in stock; caps the quantity when given
    #[arg(long)]
    stock: Option<u32>,
}

pub(crate) fn run(config: &AppConfig, args: QuoteArgs, mut out: impl io::Write) -> Result<(), CliError> {
    let currency = config.currency()?;

    let start = match args.start {
        Some(start) => start,
        None => today_in(&config.time_zone()?),
    };

    let quantity = match args.stock {
        Some(stock) => StockQuantity::clamped(args.quantity, stock).get(),
        None => args.quantity.max(1),
    };

    let quote = quote(args.price, start, parse_date(&args.end), quantity);

    tracing::debug!(days = quote.days, total = %quote.total_price, "quoted rental");

    write_quote(&mut out, &quote, currency)?;

    Ok(())
}
