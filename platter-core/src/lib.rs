//! Platter Core - restaurant domain types and document store access
//!
//! This crate holds the restaurant record shape shared by the gateway and the
//! operator CLI, the [`RestaurantStore`] abstraction the gateway reads
//! through, and its MongoDB and in-memory implementations.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod restaurant;
pub mod store;

pub use catalog::default_restaurants;
pub use error::{Result, StoreError};
pub use restaurant::{MinOrder, Restaurant, RestaurantId};
pub use store::{InMemoryStore, MongoStore, RestaurantStore, StoreSettings};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
