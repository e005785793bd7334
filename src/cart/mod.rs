//! Cart

use rust_decimal::Decimal;

use crate::{items::LineItem, pricing::total_price, products::ProductId};

mod store;

pub use store::{CART_KEY, CartError, CartStore};

/// Ordered collection of line items, at most one per product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create a new, empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cart from a sequence of items, merging repeated products.
    pub fn with_items(items: impl IntoIterator<Item = LineItem>) -> Self {
        let mut cart = Self::new();

        for item in items {
            cart.add(item);
        }

        cart
    }

    /// Add an item, merging its quantity into an existing line for the same product.
    pub fn add(&mut self, item: LineItem) {
        match self.get_mut(item.product_id()) {
            Some(existing) => existing.merge_quantity(item.quantity()),
            None => self.items.push(item),
        }
    }

    /// Overwrite the quantity of a product's line. Returns `false` if the
    /// product is not in the cart.
    ///
    /// The quantity is stored as given, including zero or negative values.
    pub fn set_quantity(&mut self, product: ProductId, quantity: i64) -> bool {
        let Some(item) = self.get_mut(product) else {
            return false;
        };

        item.set_quantity(quantity);

        true
    }

    /// Remove a product's line. Returns `false` if the product is not in the cart.
    pub fn remove(&mut self, product: ProductId) -> bool {
        let before = self.items.len();

        self.items.retain(|item| item.product_id() != product);

        self.items.len() != before
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `unit_price × quantity` over all lines.
    pub fn total(&self) -> Decimal {
        total_price(&self.items)
    }

    /// Get the line for a product.
    pub fn get(&self, product: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.product_id() == product)
    }

    fn get_mut(&mut self, product: ProductId) -> Option<&mut LineItem> {
        self.items
            .iter_mut()
            .find(|item| item.product_id() == product)
    }

    /// Check if the cart holds a line for the product.
    pub fn contains(&self, product: ProductId) -> bool {
        self.get(product).is_some()
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Iterate over the lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |acc, item| acc.saturating_add(item.quantity()))
    }

    /// Get the number of lines in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
