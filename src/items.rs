//! Items

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    prices::Price,
    products::{Product, ProductId},
};

/// A product entry in the cart with its captured price and quantity.
///
/// Display metadata and price are copied when the item is added and are never
/// refreshed from the catalogue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    product_id: ProductId,
    name: String,
    image_url: String,
    unit_price: Price,
    quantity: i64,
}

impl LineItem {
    /// Creates a line item for a single unit.
    pub fn new(
        product_id: ProductId,
        name: impl Into<String>,
        image_url: impl Into<String>,
        unit_price: Price,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            image_url: image_url.into(),
            unit_price,
            quantity: 1,
        }
    }

    /// Sets the number of units. Zero is raised to one.
    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = i64::from(quantity.max(1));
        self
    }

    /// Returns the product id of the item
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Returns the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display image
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Returns the price per unit
    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// Returns the quantity.
    ///
    /// Only [`LineItem::with_quantity`] guarantees a positive value; direct
    /// quantity updates through the cart are stored unchecked.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    pub(crate) fn merge_quantity(&mut self, quantity: i64) {
        self.quantity = self.quantity.saturating_add(quantity);
    }

    /// `unit_price × quantity`
    pub fn line_total(&self) -> Decimal {
        self.unit_price
            .amount()
            .saturating_mul(Decimal::from(self.quantity))
    }
}

impl From<&Product> for LineItem {
    fn from(product: &Product) -> Self {
        LineItem::new(
            product.id,
            product.name.clone(),
            product.image_url.clone(),
            product.price,
        )
    }
}
