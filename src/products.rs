//! Products

use std::{fmt, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::prices::Price;

/// Product Key
///
/// Opaque identifier assigned by the product catalogue. Written as a JSON
/// number; numeric strings are accepted on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawProductId", into = "u64")]
pub struct ProductId(u64);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawProductId {
    Number(u64),
    Text(String),
}

impl ProductId {
    /// Creates a product id from its raw value.
    pub const fn new(id: u64) -> Self {
        ProductId(id)
    }

    /// Returns the raw value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId(id)
    }
}

impl From<ProductId> for u64 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl TryFrom<RawProductId> for ProductId {
    type Error = ParseIntError;

    fn try_from(raw: RawProductId) -> Result<Self, Self::Error> {
        match raw {
            RawProductId::Number(id) => Ok(ProductId(id)),
            RawProductId::Text(text) => text.parse(),
        }
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ProductId)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Product
///
/// The already-resolved view of a catalogue product that pricing and the cart
/// work from. Nothing in this crate fetches products.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product id
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Primary image shown alongside the product
    pub image_url: String,

    /// Rental price per day
    pub price: Price,

    /// Units available to rent
    pub stock: u32,
}
