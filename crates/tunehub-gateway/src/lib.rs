//! # tunehub-gateway
//!
//! WebSocket gateway for presence and direct messages.

pub mod broadcast;
pub mod connection;
pub mod error;
pub mod handlers;
pub mod presence;
pub mod protocol;
pub mod relay;
pub mod server;

pub use error::{GatewayError, GatewayResult};
pub use server::{create_app, create_gateway_state, run, run_server, GatewayState};
