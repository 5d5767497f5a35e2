//! # tunehub-api
//!
//! REST API server built with Axum framework: catalog browsing, admin
//! catalog management, stats, users and the sign-in callback.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
