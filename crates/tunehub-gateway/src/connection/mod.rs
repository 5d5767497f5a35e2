//! Connection management
//!
//! Tracks live sockets and their outbound queues.

mod connection;
mod manager;

pub use connection::Connection;
pub use manager::ConnectionManager;
