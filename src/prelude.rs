//! Rentcart prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{CART_KEY, Cart, CartError, CartStore},
    items::LineItem,
    prices::{Price, PriceError},
    pricing::total_price,
    products::{Product, ProductId},
    rentals::{
        RentalQuote, RentalSelection, StockQuantity, default_time_zone, parse_date, quote,
        rental_days, today_in,
    },
    session::{SESSION_KEY, SessionContext, SessionError, SessionUser},
    storage::{FileStorage, MemoryStorage, Storage, StorageError},
};
