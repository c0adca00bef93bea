//! Platter HTTP Server - restaurant gateway
//!
//! Serves restaurant records from the document store and forwards menu and
//! order requests to the downstream order service, relaying its responses.

pub mod api;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod proxy;
pub mod state;
pub mod tracing;

pub use api::{ErrorBody, HealthResponse, HealthStatus, RestaurantList};
pub use config::{ConfigError, GatewayConfig};
pub use error::{ApiError, ApiResult};
pub use proxy::{OrderServiceClient, ProxyError, Relayed};
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Gateway routes without middleware
pub fn routes(state: AppState) -> Router {
    Router::new()
        // Restaurants
        .route("/api/restaurants", get(handlers::list_restaurants))
        .route("/api/restaurants/:id", get(handlers::get_restaurant))
        // Order service
        .route("/api/menu/:id", get(handlers::get_menu))
        .route("/api/orders", post(handlers::create_order))
        .route("/api/orders/:order_id", get(handlers::get_order))
        // Health checks
        .route("/health", get(handlers::health))
        .route("/health/ready", get(handlers::health_ready))
        // Metrics
        .route("/metrics", get(handlers::render_metrics))
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Gateway routes wrapped in tracing, CORS and compression layers
pub fn app(state: AppState) -> Router {
    routes(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .layer(CompressionLayer::new()),
    )
}
