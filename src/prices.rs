//! Prices

use std::{fmt, ops::Deref, str::FromStr};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Serialize, Serializer, ser::Error as _};
use thiserror::Error;

/// Errors that can occur while constructing a price.
#[derive(Debug, Error, PartialEq)]
pub enum PriceError {
    /// The amount was below zero.
    #[error("price {0} is negative")]
    Negative(Decimal),

    /// The text could not be parsed as a decimal amount.
    #[error("invalid price {0:?}")]
    Invalid(String),
}

/// A non-negative amount, agnostic of currency and minor units.
///
/// Serialised as a JSON number; numbers and numeric strings are both accepted
/// on read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Price = Price(Decimal::ZERO);

    /// Creates a new price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_zero() {
            return Ok(Price::ZERO);
        }

        if amount.is_sign_negative() {
            return Err(PriceError::Negative(amount));
        }

        Ok(Price(amount))
    }

    /// Creates a price from a whole amount.
    pub fn from_whole(amount: u64) -> Self {
        Price(Decimal::from(amount))
    }

    /// Returns the underlying amount.
    pub fn amount(self) -> Decimal {
        self.0
    }
}

impl Deref for Price {
    type Target = Decimal;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Price::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract().is_zero()
            && let Some(whole) = self.0.to_u64()
        {
            return serializer.serialize_u64(whole);
        }

        let amount = self
            .0
            .to_f64()
            .ok_or_else(|| S::Error::custom(format!("price {} is not representable", self.0)))?;

        serializer.serialize_f64(amount)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim()).map_err(|err| {
            tracing::debug!(input = s, %err, "rejecting unparseable price");

            PriceError::Invalid(s.to_string())
        })?;

        Price::new(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_price() -> TestResult {
        let price = Price::new(Decimal::new(1250, 2))?;

        assert_eq!(price.amount(), Decimal::new(1250, 2));

        Ok(())
    }

    #[test]
    fn negative_price_is_rejected() {
        assert_eq!(
            Price::new(Decimal::new(-1, 2)),
            Err(PriceError::Negative(Decimal::new(-1, 2)))
        );
    }

    #[test]
    fn negative_zero_is_zero() -> TestResult {
        let price = Price::new(-Decimal::ZERO)?;

        assert!(price.is_zero());

        Ok(())
    }

    #[test]
    fn price_derefs_to_decimal() {
        let price = Price::from_whole(100);

        assert_eq!(*price, Decimal::from(100));
    }

    #[test]
    fn parses_from_text() -> TestResult {
        assert_eq!(" 199.99 ".parse::<Price>()?, Price::new(Decimal::new(19999, 2))?);
        assert!(matches!("abc".parse::<Price>(), Err(PriceError::Invalid(_))));
        assert!(matches!("-5".parse::<Price>(), Err(PriceError::Negative(_))));

        Ok(())
    }

    #[test]
    fn serializes_as_a_number() -> TestResult {
        assert_eq!(serde_json::to_string(&Price::from_whole(200))?, "200");
        assert_eq!(serde_json::to_string(&Price::new(Decimal::new(1205, 1))?)?, "120.5");
        assert_eq!(serde_json::to_string(&Price::ZERO)?, "0");

        Ok(())
    }

    #[test]
    fn deserializes_numbers_and_strings() -> TestResult {
        let from_number: Price = serde_json::from_str("250")?;
        let from_string: Price = serde_json::from_str("\"250.5\"")?;

        assert_eq!(from_number, Price::from_whole(250));
        assert_eq!(from_string, Price::new(Decimal::new(2505, 1))?);
        assert!(serde_json::from_str::<Price>("-1").is_err());

        Ok(())
    }
}
