//! In-memory restaurant store

use super::RestaurantStore;
use crate::catalog::default_restaurants;
use crate::error::{Result, StoreError};
use crate::restaurant::{Restaurant, RestaurantId};
use async_trait::async_trait;

/// Restaurant store held in process memory.
///
/// Stands in for the document store in tests and local runs. An unavailable
/// store fails every call, which exercises the gateway's error paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    restaurants: Vec<Restaurant>,
    outage: Option<String>,
}

impl InMemoryStore {
    /// Store holding `restaurants` in the given order
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self {
            restaurants,
            outage: None,
        }
    }

    /// Store holding the built-in catalog
    pub fn seeded() -> Self {
        Self::new(default_restaurants())
    }

    /// Store that fails every call with `reason`
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            restaurants: Vec::new(),
            outage: Some(reason.into()),
        }
    }

    /// Number of stored restaurants
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    /// Whether the store holds no restaurants
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    fn check_available(&self) -> Result<()> {
        match &self.outage {
            Some(reason) => Err(StoreError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RestaurantStore for InMemoryStore {
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>> {
        self.check_available()?;
        Ok(self.restaurants.clone())
    }

    async fn find_restaurant(&self, id: RestaurantId) -> Result<Option<Restaurant>> {
        self.check_available()?;
        Ok(self.restaurants.iter().find(|r| r.id == id).cloned())
    }

    async fn ping(&self) -> Result<()> {
        self.check_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[tokio::test]
    async fn test_list_preserves_store_order() {
        let store = InMemoryStore::seeded();
        let listed = store.list_restaurants().await.unwrap();
        assert_eq!(listed.len(), store.len());
        assert_eq!(listed, default_restaurants());
    }

    #[tokio::test]
    async fn test_find_missing_restaurant() {
        let store = InMemoryStore::seeded();
        assert!(store.find_restaurant(999).await.unwrap().is_none());
        assert!(store.find_restaurant(-1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_every_call() {
        let store = InMemoryStore::unavailable("connection refused");
        assert!(matches!(
            store.list_restaurants().await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(matches!(
            store.find_restaurant(1).await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(store.ping().await.is_err());
    }

    proptest! {
        #[test]
        fn prop_find_returns_matching_id(id in 1i64..=12) {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            let store = InMemoryStore::seeded();
            let found = runtime.block_on(store.find_restaurant(id)).unwrap();
            prop_assert_eq!(found.map(|r| r.id), Some(id));
        }
    }
}
