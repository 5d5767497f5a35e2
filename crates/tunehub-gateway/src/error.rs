//! Gateway startup errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to apply migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Failed to build services: {0}")]
    Service(#[from] tunehub_service::ServiceError),

    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

pub type GatewayResult<T> = Result<T, GatewayError>;
