//! Rentals
//!
//! Quoting a rental of some units of a product over a range of calendar dates.
//! The quote is a pure function of its inputs and is recomputed from scratch
//! whenever one of them changes; nothing is cached.

use jiff::{
    Timestamp,
    civil::Date,
    tz::{self, TimeZone},
};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::prices::Price;

mod quantity;
mod selection;

pub use quantity::StockQuantity;
pub use selection::RentalSelection;

/// IANA name of the zone "today" is evaluated in by default.
pub const DEFAULT_TIME_ZONE: &str = "Asia/Bangkok";

/// Rental duration and cost for a single product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalQuote {
    /// First day of the rental
    pub start_date: Date,

    /// Last day of the rental, if one was chosen
    pub end_date: Option<Date>,

    /// Whole days between start and end, never negative
    pub days: u32,

    /// Price per unit per day
    pub unit_price: Price,

    /// Units rented
    pub quantity: u32,

    /// `days × unit_price × quantity`
    pub total_price: Decimal,
}

/// Quote a rental.
///
/// The day count is `end - start`, so a same-day rental, an end before the
/// start and a missing end all cost nothing. The stock bound on `quantity` is
/// the caller's concern.
pub fn quote(unit_price: Price, start_date: Date, end_date: Option<Date>, quantity: u32) -> RentalQuote {
    let days = rental_days(start_date, end_date);

    let total_price = Decimal::from(days)
        .saturating_mul(unit_price.amount())
        .saturating_mul(Decimal::from(quantity));

    RentalQuote {
        start_date,
        end_date,
        days,
        unit_price,
        quantity,
        total_price,
    }
}

/// Whole days from `start` to `end`, or zero when `end` is missing or not after `start`.
pub fn rental_days(start: Date, end: Option<Date>) -> u32 {
    let Some(end) = end else {
        return 0;
    };

    let days = start.duration_until(end).as_secs() / 86_400;

    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

/// Parse a `YYYY-MM-DD` date as produced by a date picker.
///
/// Empty or invalid input is treated as no date.
pub fn parse_date(input: &str) -> Option<Date> {
    let input = input.trim();

    if input.is_empty() {
        return None;
    }

    match input.parse::<Date>() {
        Ok(date) => Some(date),
        Err(err) => {
            tracing::debug!(input, %err, "ignoring unparseable date");
            None
        }
    }
}

/// The date it currently is in `zone`.
pub fn today_in(zone: &TimeZone) -> Date {
    date_in(Timestamp::now(), zone)
}

/// The calendar date of `instant` in `zone`.
pub fn date_in(instant: Timestamp, zone: &TimeZone) -> Date {
    instant.to_zoned(zone.clone()).date()
}

/// The reference zone for rentals.
///
/// Falls back to a fixed UTC+07:00 offset, which matches `Asia/Bangkok` all
/// year round, when no time zone database is available.
pub fn default_time_zone() -> TimeZone {
    TimeZone::get(DEFAULT_TIME_ZONE).unwrap_or_else(|err| {
        tracing::warn!(zone = DEFAULT_TIME_ZONE, %err, "time zone database unavailable, using fixed offset");

        TimeZone::fixed(tz::offset(7))
    })
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn quote_multiplies_days_price_and_quantity() {
        let quote = quote(
            Price::from_whole(100),
            date(2024, 1, 1),
            Some(date(2024, 1, 4)),
            2,
        );

        assert_eq!(quote.days, 3);
        assert_eq!(quote.total_price, Decimal::from(600));
    }

    #[test]
    fn same_day_rental_is_free() {
        let quote = quote(
            Price::from_whole(50),
            date(2024, 1, 5),
            Some(date(2024, 1, 5)),
            1,
        );

        assert_eq!(quote.days, 0);
        assert_eq!(quote.total_price, Decimal::ZERO);
    }

    #[test]
    fn inverted_range_is_free() {
        let quote = quote(
            Price::from_whole(50),
            date(2024, 1, 5),
            Some(date(2023, 12, 25)),
            3,
        );

        assert_eq!(quote.days, 0);
        assert_eq!(quote.total_price, Decimal::ZERO);
    }

    #[test]
    fn missing_end_date_is_free() {
        let quote = quote(Price::from_whole(50), date(2024, 1, 5), None, 3);

        assert_eq!(quote.days, 0);
        assert_eq!(quote.total_price, Decimal::ZERO);
    }

    #[test]
    fn days_span_month_and_leap_day_boundaries() {
        assert_eq!(rental_days(date(2024, 2, 28), Some(date(2024, 3, 1))), 2);
        assert_eq!(rental_days(date(2023, 2, 28), Some(date(2023, 3, 1))), 1);
        assert_eq!(rental_days(date(2023, 12, 31), Some(date(2024, 12, 31))), 366);
    }

    #[test]
    fn quote_keeps_fractional_prices() -> testresult::TestResult {
        let quote = quote(
            "12.25".parse()?,
            date(2024, 1, 1),
            Some(date(2024, 1, 3)),
            3,
        );

        assert_eq!(quote.total_price, Decimal::new(7350, 2));

        Ok(())
    }

    #[test]
    fn parse_date_accepts_picker_values() {
        assert_eq!(parse_date("2024-01-04"), Some(date(2024, 1, 4)));
        assert_eq!(parse_date(" 2024-01-04 "), Some(date(2024, 1, 4)));
    }

    #[test]
    fn parse_date_treats_bad_input_as_absent() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2024-02-30"), None);
        assert_eq!(parse_date("tomorrow"), None);
    }

    #[test]
    fn date_in_uses_the_zone_offset() -> testresult::TestResult {
        // 2024-01-01T18:30:00Z is already the 2nd in UTC+07:00.
        let instant: Timestamp = "2024-01-01T18:30:00Z".parse()?;

        assert_eq!(date_in(instant, &TimeZone::UTC), date(2024, 1, 1));
        assert_eq!(
            date_in(instant, &TimeZone::fixed(tz::offset(7))),
            date(2024, 1, 2)
        );

        Ok(())
    }

    #[test]
    fn default_zone_is_seven_hours_ahead() -> testresult::TestResult {
        let instant: Timestamp = "2024-07-01T17:00:00Z".parse()?;

        assert_eq!(date_in(instant, &default_time_zone()), date(2024, 7, 2));

        Ok(())
    }
}
