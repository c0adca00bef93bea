//! API request and response types

use platter_core::Restaurant;
use serde::{Deserialize, Serialize};

/// Restaurant list envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantList {
    /// Restaurants in store order
    pub restaurants: Vec<Restaurant>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: HealthStatus,

    /// Name of this gateway instance
    pub service: String,
}

/// Health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Service is healthy
    Healthy,
}

/// Error envelope returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message, never carrying internal detail
    pub error: String,
}
