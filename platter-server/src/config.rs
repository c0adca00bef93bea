//! Gateway configuration read from the environment

use platter_core::store::{DEFAULT_COLLECTION, DEFAULT_DATABASE};
use platter_core::StoreSettings;
use reqwest::Url;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use thiserror::Error;

/// Default downstream order service
pub const DEFAULT_ORDER_SERVICE_URL: &str = "http://localhost:3000";

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Default timeout for one downstream call
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Default name reported by `/health`
pub const DEFAULT_SERVICE_NAME: &str = "platter-gateway";

/// Invalid or missing configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is set but cannot be used
    #[error("Invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything the gateway needs to start
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Restaurant store location (`MONGODB_URI`, `MONGODB_DATABASE`, `MONGODB_COLLECTION`)
    pub store: StoreSettings,

    /// Base URL of the order service (`ORDER_SERVICE_URL`, else `NODE_SERVICE_URL`)
    pub order_service_url: Url,

    /// Listen address (`BIND_ADDRESS`)
    pub bind_address: IpAddr,

    /// Listen port (`PORT`, else `PYTHON_SERVICE_PORT`)
    pub port: u16,

    /// Timeout applied to each downstream call (`UPSTREAM_TIMEOUT_SECS`)
    pub upstream_timeout: Duration,

    /// Name reported by the liveness probe (`SERVICE_NAME`)
    pub service_name: String,
}

impl GatewayConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let uri = get("MONGODB_URI").ok_or(ConfigError::Missing("MONGODB_URI"))?;
        let store = StoreSettings::new(uri)
            .with_database(get("MONGODB_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string()))
            .with_collection(
                get("MONGODB_COLLECTION").unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
            );

        // Older deployments name these NODE_SERVICE_URL and PYTHON_SERVICE_PORT.
        let first_of =
            |keys: &[&'static str]| keys.iter().find_map(|&key| get(key).map(|value| (key, value)));

        let order_service_url = match first_of(&["ORDER_SERVICE_URL", "NODE_SERVICE_URL"]) {
            Some((key, value)) => parse_base_url(key, value)?,
            None => parse_base_url("ORDER_SERVICE_URL", DEFAULT_ORDER_SERVICE_URL.to_string())?,
        };

        let bind_address = match get("BIND_ADDRESS") {
            Some(value) => value.parse().map_err(|e: std::net::AddrParseError| {
                invalid("BIND_ADDRESS", &value, e.to_string())
            })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match first_of(&["PORT", "PYTHON_SERVICE_PORT"]) {
            Some((key, value)) => value
                .parse::<u16>()
                .map_err(|e| invalid(key, &value, e.to_string()))?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match get("UPSTREAM_TIMEOUT_SECS") {
            Some(value) => match value.parse::<u64>() {
                Ok(0) => return Err(invalid("UPSTREAM_TIMEOUT_SECS", &value, "must be positive")),
                Ok(secs) => secs,
                Err(e) => return Err(invalid("UPSTREAM_TIMEOUT_SECS", &value, e.to_string())),
            },
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        Ok(Self {
            store,
            order_service_url,
            bind_address,
            port,
            upstream_timeout: Duration::from_secs(timeout_secs),
            service_name: get("SERVICE_NAME").unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
        })
    }

    /// Address the listener binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}

fn parse_base_url(key: &'static str, value: String) -> Result<Url, ConfigError> {
    let url = Url::parse(&value).map_err(|e| invalid(key, &value, e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(key, &value, "scheme must be http or https"));
    }
    if url.cannot_be_a_base() {
        return Err(invalid(key, &value, "not a base URL"));
    }
    Ok(url)
}

fn invalid(key: &'static str, value: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: reason.into(),
    }
}
