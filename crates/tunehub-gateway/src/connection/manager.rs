//! Connection manager
//!
//! Tracks every live socket using DashMap for thread-safe access.

use super::Connection;
use crate::broadcast::Broadcaster;
use crate::protocol::ServerEvent;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Manages all active WebSocket connections
#[derive(Default)]
pub struct ConnectionManager {
    /// Active connections by connection id
    connections: DashMap<String, Arc<Connection>>,
}

impl ConnectionManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Register a new connection
    pub fn add_connection(
        &self,
        connection_id: String,
        sender: mpsc::UnboundedSender<ServerEvent>,
    ) -> Arc<Connection> {
        let connection = Connection::new(connection_id.clone(), sender);
        self.connections.insert(connection_id.clone(), connection.clone());

        tracing::debug!(connection_id = %connection_id, "Connection added");

        connection
    }

    /// Remove a connection
    pub fn remove_connection(&self, connection_id: &str) -> Option<Arc<Connection>> {
        let removed = self.connections.remove(connection_id).map(|(_, c)| c);
        if removed.is_some() {
            tracing::debug!(connection_id = %connection_id, "Connection removed");
        }
        removed
    }

    pub fn get_connection(&self, connection_id: &str) -> Option<Arc<Connection>> {
        self.connections.get(connection_id).map(|c| c.clone())
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }
}

impl Broadcaster for ConnectionManager {
    fn broadcast(&self, event: &ServerEvent) {
        let mut delivered = 0usize;
        for entry in self.connections.iter() {
            if entry.value().send(event.clone()) {
                delivered += 1;
            }
        }

        tracing::trace!(event = %event, delivered, "Broadcast event");
    }

    fn send_to(&self, connection_id: &str, event: &ServerEvent) -> bool {
        match self.connections.get(connection_id) {
            Some(connection) => connection.send(event.clone()),
            None => {
                tracing::debug!(connection_id = %connection_id, event = %event, "Target connection gone");
                false
            }
        }
    }
}

impl std::fmt::Debug for ConnectionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionManager")
            .field("connections", &self.connections.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_remove_connection() {
        let manager = ConnectionManager::new();
        let (tx, _rx) = mpsc::unbounded_channel();

        let conn = manager.add_connection("c1".to_string(), tx);
        assert_eq!(conn.id(), "c1");
        assert_eq!(manager.connection_count(), 1);
        assert!(manager.get_connection("c1").is_some());

        assert!(manager.remove_connection("c1").is_some());
        assert!(manager.remove_connection("c1").is_none());
        assert_eq!(manager.connection_count(), 0);
    }

    #[test]
    fn test_broadcast_reaches_every_connection() {
        let manager = ConnectionManager::new();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        manager.add_connection("c1".to_string(), tx1);
        manager.add_connection("c2".to_string(), tx2);

        let event = ServerEvent::UserDisconnected("u1".to_string());
        manager.broadcast(&event);

        assert_eq!(rx1.try_recv().unwrap(), event);
        assert_eq!(rx2.try_recv().unwrap(), event);
    }

    #[test]
    fn test_send_to_targets_one_connection() {
        let manager = ConnectionManager::new();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        manager.add_connection("c1".to_string(), tx1);
        manager.add_connection("c2".to_string(), tx2);

        let event = ServerEvent::MessageError("nope".to_string());
        assert!(manager.send_to("c2", &event));
        assert!(!manager.send_to("missing", &event));

        assert!(rx1.try_recv().is_err());
        assert_eq!(rx2.try_recv().unwrap(), event);
    }

    #[test]
    fn test_broadcast_skips_closed_connections() {
        let manager = ConnectionManager::new();
        let (tx1, rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        manager.add_connection("c1".to_string(), tx1);
        manager.add_connection("c2".to_string(), tx2);
        drop(rx1);

        manager.broadcast(&ServerEvent::UsersOnline(vec!["u".to_string()]));
        assert!(rx2.try_recv().is_ok());
    }
}
