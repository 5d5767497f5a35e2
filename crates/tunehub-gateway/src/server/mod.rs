//! Gateway server setup
//!
//! Provides the main WebSocket server configuration and routes.

mod handler;
mod state;

pub use handler::gateway_handler;
pub use state::GatewayState;

use crate::error::{GatewayError, GatewayResult};
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tunehub_common::AppConfig;
use tunehub_service::ServiceContextBuilder;

/// Create the gateway router
pub fn create_router() -> Router<GatewayState> {
    Router::new()
        .route("/socket", get(gateway_handler))
        .route("/health", get(health_check))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Build the complete application
pub fn create_app(state: GatewayState) -> Router {
    create_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Initialize all dependencies and create `GatewayState`
pub async fn create_gateway_state(config: &AppConfig) -> GatewayResult<GatewayState> {
    tracing::info!("Connecting to PostgreSQL...");
    let db_config = tunehub_db::DatabaseConfig::from(&config.database);
    let pool = tunehub_db::create_pool(&db_config).await?;
    tunehub_db::run_migrations(&pool).await?;
    tracing::info!("PostgreSQL connection established");

    let snowflake_generator = std::sync::Arc::new(tunehub_core::SnowflakeGenerator::new(
        config.snowflake.worker_id,
    ));

    let service_context = ServiceContextBuilder::new()
        .postgres(pool)
        .snowflake_generator(snowflake_generator)
        .build()?;

    Ok(GatewayState::new(service_context, config.heartbeat.clone()))
}

/// Serve `app` on an already bound listener
pub async fn run_server(app: Router, listener: TcpListener) -> GatewayResult<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Gateway listening on ws://{}/socket", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(GatewayError::Serve)
}

/// Run the complete gateway server with configuration
pub async fn run(config: AppConfig) -> GatewayResult<()> {
    let addr = config.gateway.address();

    let state = create_gateway_state(&config).await?;
    let app = create_app(state);

    tracing::info!("Starting Gateway server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| GatewayError::Bind { addr, source })?;

    run_server(app, listener).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
