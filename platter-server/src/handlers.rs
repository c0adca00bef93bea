//! HTTP request handlers

use crate::api::{HealthResponse, HealthStatus, RestaurantList};
use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::proxy::Relayed;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use platter_core::{Restaurant, RestaurantId};
use serde_json::Value;
use tracing::{debug, instrument, warn};

type Relay = (StatusCode, Json<Value>);

fn relay(relayed: Relayed) -> Relay {
    (relayed.status, Json(relayed.body))
}

/// Health check - liveness probe, independent of store and downstream state
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HealthStatus::Healthy,
        service: state.service_name.to_string(),
    })
}

/// Health check - readiness probe
pub async fn health_ready(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    match state.store.ping().await {
        Ok(()) => Ok(Json(HealthResponse {
            status: HealthStatus::Healthy,
            service: state.service_name.to_string(),
        })),
        Err(e) => {
            warn!("Readiness check failed: {}", e);
            Err(ApiError::ServiceUnavailable("Store not ready".to_string()))
        }
    }
}

/// `GET /api/restaurants`
#[instrument(skip_all)]
pub async fn list_restaurants(State(state): State<AppState>) -> ApiResult<Json<RestaurantList>> {
    let restaurants = state.store.list_restaurants().await.map_err(|e| {
        metrics::record_store_query("list_restaurants", "error");
        ApiError::upstream("Unable to fetch restaurants", e)
    })?;

    metrics::record_store_query("list_restaurants", "ok");
    debug!(count = restaurants.len(), "Listing restaurants");
    Ok(Json(RestaurantList { restaurants }))
}

/// `GET /api/restaurants/{id}`
#[instrument(skip_all)]
pub async fn get_restaurant(
    State(state): State<AppState>,
    id: Result<Path<RestaurantId>, PathRejection>,
) -> ApiResult<Json<Restaurant>> {
    let Path(id) = id?;

    let restaurant = state.store.find_restaurant(id).await.map_err(|e| {
        metrics::record_store_query("find_restaurant", "error");
        ApiError::upstream("Unable to fetch restaurant", e)
    })?;
    metrics::record_store_query("find_restaurant", "ok");

    restaurant
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Restaurant not found".to_string()))
}

/// `GET /api/menu/{id}`, relayed to the order service
pub async fn get_menu(
    State(state): State<AppState>,
    id: Result<Path<RestaurantId>, PathRejection>,
) -> ApiResult<Relay> {
    let Path(id) = id?;

    state
        .orders
        .get_menu(id)
        .await
        .map(relay)
        .map_err(|e| ApiError::upstream("Unable to fetch menu", e))
}

/// `POST /api/orders`, body relayed to the order service
pub async fn create_order(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Relay> {
    let Json(order) = body?;

    state
        .orders
        .create_order(&order)
        .await
        .map(relay)
        .map_err(|e| ApiError::upstream("Unable to create order", e))
}

/// `GET /api/orders/{order_id}`, relayed to the order service
pub async fn get_order(
    State(state): State<AppState>,
    order_id: Result<Path<String>, PathRejection>,
) -> ApiResult<Relay> {
    let Path(order_id) = order_id?;

    state
        .orders
        .get_order(&order_id)
        .await
        .map(relay)
        .map_err(|e| ApiError::upstream("Unable to fetch order", e))
}

/// Unmatched routes
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}

/// Prometheus metrics endpoint
pub async fn render_metrics() -> String {
    metrics::get_prometheus_metrics()
}
