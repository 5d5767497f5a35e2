//! Gateway state
//!
//! Application state for the gateway server.

use crate::connection::ConnectionManager;
use crate::presence::PresenceRegistry;
use crate::relay::{MessageRelay, RelayQueue};
use std::sync::Arc;
use std::time::Duration;
use tunehub_common::HeartbeatConfig;
use tunehub_service::ServiceContext;

/// Gateway application state
///
/// Holds all shared dependencies for the gateway server. The registry and the
/// relay both deliver through the connection manager.
#[derive(Clone)]
pub struct GatewayState {
    /// Service context with repositories and services
    service_context: Arc<ServiceContext>,
    /// Live sockets and their outbound queues
    connection_manager: Arc<ConnectionManager>,
    registry: Arc<PresenceRegistry>,
    relay: Arc<MessageRelay>,
    heartbeat: HeartbeatConfig,
}

impl GatewayState {
    /// Wire up a gateway around a service context
    pub fn new(service_context: ServiceContext, heartbeat: HeartbeatConfig) -> Self {
        let service_context = Arc::new(service_context);
        let connection_manager = ConnectionManager::new_shared();
        let registry = Arc::new(PresenceRegistry::new(connection_manager.clone()));
        let relay = Arc::new(MessageRelay::new(
            service_context.clone(),
            registry.clone(),
            connection_manager.clone(),
        ));

        Self {
            service_context,
            connection_manager,
            registry,
            relay,
            heartbeat,
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    pub fn connection_manager(&self) -> &ConnectionManager {
        &self.connection_manager
    }

    pub fn registry(&self) -> &PresenceRegistry {
        &self.registry
    }

    /// Start the relay queue for one connection
    pub fn relay_queue(&self, connection_id: &str) -> RelayQueue {
        RelayQueue::spawn(self.relay.clone(), connection_id.to_string())
    }

    /// How often each socket is pinged
    pub fn heartbeat_interval(&self) -> Duration {
        Duration::from_millis(self.heartbeat.interval_ms)
    }

    /// How long a socket may stay silent before it is dropped
    pub fn heartbeat_timeout(&self) -> Duration {
        Duration::from_millis(self.heartbeat.timeout_ms)
    }
}

impl std::fmt::Debug for GatewayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayState")
            .field("connection_manager", &self.connection_manager)
            .field("registry", &self.registry)
            .field("heartbeat", &self.heartbeat)
            .finish()
    }
}
