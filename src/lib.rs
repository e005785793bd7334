//! Rentcart
//!
//! Rental price quoting and a persistent shopping cart for a rental
//! marketplace storefront. Product data, users and images live behind an
//! external API; this crate owns the arithmetic and the client-side state.

pub mod cart;
pub mod config;
pub mod items;
pub mod observability;
pub mod prelude;
pub mod prices;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod rentals;
pub mod session;
pub mod storage;
