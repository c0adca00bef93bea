//! HTTP client for the downstream order service
//!
//! Menu and order requests are forwarded as-is: the downstream status code and
//! JSON body are relayed back without interpretation. Anything that prevents
//! reading a JSON body (connection failure, timeout, non-JSON payload) is a
//! [`ProxyError`], which handlers turn into a fixed 500 response.

use crate::metrics;
use axum::http::{Method, StatusCode};
use platter_core::RestaurantId;
use reqwest::Url;
use serde_json::Value;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Failure to obtain a JSON response from the order service
#[derive(Error, Debug)]
pub enum ProxyError {
    /// The HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The base URL cannot carry path segments
    #[error("Invalid order service URL: {0}")]
    InvalidUrl(String),

    /// Connection, timeout or protocol failure
    #[error("Order service request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body was not JSON
    #[error("Order service returned a malformed body: {0}")]
    MalformedBody(#[source] reqwest::Error),
}

/// A downstream response to relay verbatim
#[derive(Debug, Clone, PartialEq)]
pub struct Relayed {
    /// Downstream status code
    pub status: StatusCode,
    /// Downstream JSON body
    pub body: Value,
}

/// Client for the order service's menu and order endpoints.
///
/// Cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct OrderServiceClient {
    client: reqwest::Client,
    base_url: Url,
}

impl OrderServiceClient {
    /// Client for `base_url` with a per-request `timeout`
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ProxyError> {
        if base_url.cannot_be_a_base() {
            return Err(ProxyError::InvalidUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .tcp_keepalive(Duration::from_secs(30))
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(ProxyError::Client)?;

        Ok(Self { client, base_url })
    }

    /// Base URL requests are forwarded to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /api/menu/{restaurant_id}`
    pub async fn get_menu(&self, restaurant_id: RestaurantId) -> Result<Relayed, ProxyError> {
        let id = restaurant_id.to_string();
        self.relay("get_menu", Method::GET, &["api", "menu", id.as_str()], None)
            .await
    }

    /// `POST /api/orders` with `order` as the JSON body
    pub async fn create_order(&self, order: &Value) -> Result<Relayed, ProxyError> {
        self.relay("create_order", Method::POST, &["api", "orders"], Some(order))
            .await
    }

    /// `GET /api/orders/{order_id}`; the id travels as one encoded path segment
    pub async fn get_order(&self, order_id: &str) -> Result<Relayed, ProxyError> {
        self.relay("get_order", Method::GET, &["api", "orders", order_id], None)
            .await
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ProxyError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ProxyError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    #[instrument(name = "order_service", skip(self, segments, body), fields(otel.kind = "client"))]
    async fn relay(
        &self,
        operation: &'static str,
        method: Method,
        segments: &[&str],
        body: Option<&Value>,
    ) -> Result<Relayed, ProxyError> {
        let url = self.endpoint(segments)?;
        let started = Instant::now();

        let mut request = self.client.request(method, url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let result = match request.send().await {
            Ok(response) => {
                let status = response.status();
                response
                    .json::<Value>()
                    .await
                    .map(|body| Relayed { status, body })
                    .map_err(ProxyError::MalformedBody)
            }
            Err(e) => Err(ProxyError::Transport(e)),
        };

        let elapsed = started.elapsed();
        match &result {
            Ok(relayed) => {
                debug!(%url, status = relayed.status.as_u16(), ?elapsed, "Relayed order service response");
                metrics::record_proxy_call(operation, relayed.status.as_str(), elapsed);
            }
            Err(e) => {
                warn!(%url, error = %e, ?elapsed, "Order service call failed");
                metrics::record_proxy_call(operation, "error", elapsed);
            }
        }

        result
    }
}
