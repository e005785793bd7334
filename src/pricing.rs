//! Pricing

use rust_decimal::Decimal;

use crate::items::LineItem;

/// Calculates the total price of a list of line items.
///
/// Returns zero when no items are provided. Saturates at [`Decimal::MAX`]
/// instead of overflowing.
pub fn total_price<'a>(items: impl IntoIterator<Item = &'a LineItem>) -> Decimal {
    items
        .into_iter()
        .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.line_total()))
}
