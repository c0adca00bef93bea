//! Application state

use crate::proxy::OrderServiceClient;
use platter_core::RestaurantStore;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Restaurant store, created once at startup
    pub store: Arc<dyn RestaurantStore>,

    /// Client for the downstream order service
    pub orders: OrderServiceClient,

    /// Name reported by the liveness probe
    pub service_name: Arc<str>,
}

impl AppState {
    /// Create new application state
    pub fn new(
        store: Arc<dyn RestaurantStore>,
        orders: OrderServiceClient,
        service_name: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            store,
            orders,
            service_name: service_name.into(),
        }
    }
}
