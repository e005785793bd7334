//! Persistent cart store.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    cart::Cart,
    items::LineItem,
    products::ProductId,
    storage::{Storage, StorageError},
};

/// Storage key the cart's line items are persisted under.
pub const CART_KEY: &str = "cartItems";

/// Errors raised while persisting the cart.
///
/// These only originate from the storage backend; with an infallible backend
/// such as [`MemoryStorage`](crate::storage::MemoryStorage) no cart operation
/// fails.
#[derive(Debug, Error)]
pub enum CartError {
    /// The storage backend rejected the write.
    #[error("failed to persist cart")]
    Storage(#[from] StorageError),

    /// The line items could not be encoded.
    #[error("failed to encode cart")]
    Encode(#[from] serde_json::Error),
}

/// A [`Cart`] kept in sync with a storage backend.
///
/// Every mutation is applied to a copy of the cart, written to storage, and
/// only then becomes visible. A failed write leaves both the in-memory cart and
/// the stored value as they were.
#[derive(Debug)]
pub struct CartStore<S: Storage> {
    storage: S,
    cart: Cart,
}

impl<S: Storage> CartStore<S> {
    /// Load the cart persisted in `storage`.
    ///
    /// A missing key, an unreadable backend or a malformed value all yield an
    /// empty cart.
    pub fn load(storage: S) -> Self {
        let cart = match storage.get(CART_KEY) {
            Ok(Some(raw)) => decode(&raw),
            Ok(None) => {
                debug!("no persisted cart, starting empty");
                Cart::new()
            }
            Err(err) => {
                warn!(error = %err, "could not read persisted cart, starting empty");
                Cart::new()
            }
        };

        debug!(lines = cart.len(), total = %cart.total(), "cart loaded");

        Self { storage, cart }
    }

    /// Add an item, merging with an existing line for the same product.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the updated cart could not be persisted.
    pub fn add(&mut self, item: LineItem) -> Result<(), CartError> {
        let product = item.product_id();
        let quantity = item.quantity();

        let mut next = self.cart.clone();
        next.add(item);

        self.commit(next)?;

        debug!(%product, quantity, total = %self.total(), "added item to cart");

        Ok(())
    }

    /// Overwrite the quantity of a product's line. Unknown products are ignored.
    ///
    /// The quantity is not clamped to stock or to a minimum of one.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the updated cart could not be persisted.
    pub fn set_quantity(&mut self, product: ProductId, quantity: i64) -> Result<(), CartError> {
        let mut next = self.cart.clone();

        if !next.set_quantity(product, quantity) {
            debug!(%product, "quantity update for product not in cart ignored");
            return Ok(());
        }

        self.commit(next)?;

        debug!(%product, quantity, total = %self.total(), "updated cart quantity");

        Ok(())
    }

    /// Remove a product's line. Unknown products are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the updated cart could not be persisted.
    pub fn remove(&mut self, product: ProductId) -> Result<(), CartError> {
        let mut next = self.cart.clone();

        if !next.remove(product) {
            debug!(%product, "removal of product not in cart ignored");
            return Ok(());
        }

        self.commit(next)?;

        debug!(%product, total = %self.total(), "removed item from cart");

        Ok(())
    }

    /// Empty the cart and delete its persisted value.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the persisted value could not be deleted.
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.storage.remove(CART_KEY)?;
        self.cart.clear();

        debug!("cart cleared");

        Ok(())
    }

    /// Current cart total.
    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    /// Current cart contents.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// The backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store, returning the backing storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn commit(&mut self, next: Cart) -> Result<(), CartError> {
        let encoded = serde_json::to_string(next.items())?;

        if let Err(err) = self.storage.set(CART_KEY, &encoded) {
            warn!(error = %err, "cart write failed, keeping previous state");
            return Err(err.into());
        }

        self.cart = next;

        Ok(())
    }
}

fn decode(raw: &str) -> Cart {
    match serde_json::from_str::<Vec<LineItem>>(raw) {
        Ok(items) => Cart::with_items(items),
        Err(err) => {
            warn!(error = %err, "discarding malformed persisted cart");
            Cart::new()
        }
    }
}
