//! Platter gateway binary

use anyhow::Context;
use platter_core::MongoStore;
use platter_server::{AppState, GatewayConfig, OrderServiceClient};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is normal outside local development.
    let dotenv = dotenvy::dotenv();

    let enable_otel = platter_server::tracing::otel_enabled();
    if enable_otel {
        platter_server::tracing::init_tracing_stack("platter-server")?;
        info!("OpenTelemetry tracing enabled");
    } else {
        platter_server::tracing::init_console_logging()?;
        info!("Console logging enabled (set OTEL_ENABLED=true for OpenTelemetry)");
    }

    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    info!("Starting Platter gateway v{}", env!("CARGO_PKG_VERSION"));

    let config = GatewayConfig::from_env().context("Invalid gateway configuration")?;

    platter_server::metrics::init_prometheus()?;
    platter_server::metrics::init_metrics();

    let store = MongoStore::connect(&config.store)
        .await
        .context("Failed to create restaurant store client")?;

    let orders = OrderServiceClient::new(config.order_service_url.clone(), config.upstream_timeout)?;
    info!(
        "Forwarding menu and order requests to {} (timeout {:?})",
        orders.base_url(),
        config.upstream_timeout
    );

    let state = AppState::new(Arc::new(store), orders, config.service_name.clone());
    let app = platter_server::app(state);

    let addr = config.socket_addr();
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    let shutdown_signal = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received shutdown signal, shutting down gracefully..."),
            Err(e) => {
                error!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    if enable_otel {
        info!("Flushing OpenTelemetry traces...");
        platter_server::tracing::shutdown_telemetry();
    }

    info!("Server shutdown complete");
    Ok(())
}
