//! TuneHub API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p tunehub-api
//! ```
//!
//! Configuration is loaded from environment variables (a `.env` file is honored).

use tracing::{error, info};
use tunehub_common::{try_init_tracing_with_config, AppConfig, Environment, TracingConfig};

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

    info!(
        env = ?config.app.env,
        port = config.api.port,
        "Starting TuneHub API Server..."
    );

    if let Err(e) = tunehub_api::run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}
