//! MongoDB-backed restaurant store

use super::{RestaurantStore, StoreSettings};
use crate::error::{Result, StoreError};
use crate::restaurant::{Restaurant, RestaurantId};
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::{ClientOptions, FindOneOptions, FindOptions};
use mongodb::{Client, Collection, Database};
use tracing::{debug, info};

const APP_NAME: &str = "platter";

/// Restaurant store over a MongoDB collection.
///
/// Cloning is cheap; all clones share the driver's connection pool.
#[derive(Clone)]
pub struct MongoStore {
    database: Database,
    restaurants: Collection<Restaurant>,
}

impl MongoStore {
    /// Build a client from `settings`.
    ///
    /// The driver connects lazily, so an unreachable server surfaces on the
    /// first query rather than here. A malformed connection string fails now.
    pub async fn connect(settings: &StoreSettings) -> Result<Self> {
        let mut options = ClientOptions::parse(&settings.uri)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        if options.app_name.is_none() {
            options.app_name = Some(APP_NAME.to_string());
        }

        let client =
            Client::with_options(options).map_err(|e| StoreError::Connection(e.to_string()))?;
        let database = client.database(&settings.database);
        let restaurants = database.collection::<Restaurant>(&settings.collection);

        info!(
            database = %settings.database,
            collection = %settings.collection,
            "Restaurant store client created"
        );

        Ok(Self {
            database,
            restaurants,
        })
    }

    /// Drop every restaurant and insert `restaurants` in their place.
    ///
    /// Used by the operator CLI only; the gateway never writes.
    pub async fn replace_all(&self, restaurants: &[Restaurant]) -> Result<usize> {
        let deleted = self.restaurants.delete_many(doc! {}, None).await?;
        debug!(deleted = deleted.deleted_count, "Cleared restaurant collection");

        if restaurants.is_empty() {
            return Ok(0);
        }

        let inserted = self.restaurants.insert_many(restaurants, None).await?;
        Ok(inserted.inserted_ids.len())
    }

    fn without_storage_id() -> Document {
        doc! { "_id": 0 }
    }
}

#[async_trait]
impl RestaurantStore for MongoStore {
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>> {
        let options = FindOptions::builder()
            .projection(Self::without_storage_id())
            .build();
        let cursor = self.restaurants.find(None, options).await?;
        let restaurants: Vec<Restaurant> = cursor.try_collect().await?;

        debug!(count = restaurants.len(), "Listed restaurants");
        Ok(restaurants)
    }

    async fn find_restaurant(&self, id: RestaurantId) -> Result<Option<Restaurant>> {
        let options = FindOneOptions::builder()
            .projection(Self::without_storage_id())
            .build();
        let restaurant = self.restaurants.find_one(doc! { "id": id }, options).await?;

        debug!(id, found = restaurant.is_some(), "Looked up restaurant");
        Ok(restaurant)
    }

    async fn ping(&self) -> Result<()> {
        self.database.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_rejects_malformed_uri() {
        let settings = StoreSettings::new("not-a-mongodb-uri");
        let result = MongoStore::connect(&settings).await;
        assert!(matches!(result, Err(StoreError::Connection(_))));
    }

    #[test]
    fn test_projection_hides_storage_id() {
        let projection = MongoStore::without_storage_id();
        assert_eq!(projection.get_i32("_id").unwrap(), 0);
    }
}
