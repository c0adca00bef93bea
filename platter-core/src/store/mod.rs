//! Restaurant store abstraction
//!
//! The gateway reads restaurants through [`RestaurantStore`] so the backing
//! document store can be swapped for [`InMemoryStore`] in tests.

mod memory;
mod mongo;

pub use memory::InMemoryStore;
pub use mongo::MongoStore;

use crate::error::Result;
use crate::restaurant::{Restaurant, RestaurantId};
use async_trait::async_trait;

/// Default database holding the restaurant collection
pub const DEFAULT_DATABASE: &str = "Food";

/// Default restaurant collection name
pub const DEFAULT_COLLECTION: &str = "restaurants";

/// Read access to restaurant records
#[async_trait]
pub trait RestaurantStore: Send + Sync {
    /// All restaurants, in store order
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>>;

    /// The restaurant whose application `id` matches, if any
    async fn find_restaurant(&self, id: RestaurantId) -> Result<Option<Restaurant>>;

    /// Round-trip to the store without reading data
    async fn ping(&self) -> Result<()>;
}

/// Where the restaurant collection lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    /// Connection string
    pub uri: String,
    /// Database name
    pub database: String,
    /// Collection name
    pub collection: String,
}

impl StoreSettings {
    /// Settings for `uri` with the default database and collection
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }

    /// Override the database name
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Override the collection name
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }
}
