//! TuneHub Gateway Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p tunehub-gateway
//! ```
//!
//! Configuration is loaded from environment variables.

use tunehub_common::{try_init_tracing_with_config, AppConfig, Environment, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env();

    let env = config
        .as_ref()
        .map_or(Environment::Development, |c| c.app.env);
    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        error!(error = %e, "Gateway failed to start");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> Result<(), tunehub_gateway::GatewayError> {
    info!(
        env = ?config.app.env,
        port = config.gateway.port,
        "Starting TuneHub Gateway Server..."
    );

    tunehub_gateway::run(config).await
}
