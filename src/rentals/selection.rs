//! Rental selection for a single product.

use jiff::{civil::Date, tz::TimeZone};

use crate::{items::LineItem, products::Product};

use super::{RentalQuote, StockQuantity, parse_date, quote, today_in};

/// The dates and quantity chosen for renting one product.
///
/// Inputs are stored as given; [`RentalSelection::quote`] derives the price
/// from them on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct RentalSelection {
    product: Product,
    start_date: Date,
    end_date: Option<Date>,
    quantity: StockQuantity,
}

impl RentalSelection {
    /// Start a selection of one unit beginning on `start_date`, with no end date.
    pub fn new(product: Product, start_date: Date) -> Self {
        let quantity = StockQuantity::new(product.stock);

        Self {
            product,
            start_date,
            end_date: None,
            quantity,
        }
    }

    /// Start a selection beginning today in `zone`.
    pub fn starting_today(product: Product, zone: &TimeZone) -> Self {
        Self::new(product, today_in(zone))
    }

    /// The product being rented.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// First day of the rental.
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Last day of the rental, if chosen.
    pub fn end_date(&self) -> Option<Date> {
        self.end_date
    }

    /// Units selected.
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Choose the last day of the rental.
    pub fn set_end_date(&mut self, end_date: Option<Date>) {
        self.end_date = end_date;
    }

    /// Choose the last day from date picker text; invalid text clears it.
    pub fn set_end_date_input(&mut self, input: &str) {
        self.end_date = parse_date(input);
    }

    /// Set the quantity, clamped to `1..=stock`.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = StockQuantity::clamped(quantity, self.product.stock);
    }

    /// One more unit, up to stock.
    pub fn increase_quantity(&mut self) {
        self.quantity.increase();
    }

    /// One fewer unit, down to one.
    pub fn decrease_quantity(&mut self) {
        self.quantity.decrease();
    }

    /// Quote the current selection.
    pub fn quote(&self) -> RentalQuote {
        quote(
            self.product.price,
            self.start_date,
            self.end_date,
            self.quantity.get(),
        )
    }

    /// The cart line for the selected product and quantity.
    pub fn to_line_item(&self) -> LineItem {
        LineItem::from(&self.product).with_quantity(self.quantity.get())
    }
}
