//! Individual WebSocket connection

use crate::protocol::ServerEvent;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// A single WebSocket connection
///
/// Outbound events go through an unbounded queue drained by the socket's send
/// task, so enqueueing never blocks the caller.
pub struct Connection {
    /// Opaque per-socket identifier
    id: String,

    /// Queue feeding the socket's send task
    sender: mpsc::UnboundedSender<ServerEvent>,

    /// Last time any frame arrived from the client
    last_seen: Mutex<Instant>,

    created_at: Instant,
}

impl Connection {
    /// Create a new connection
    pub fn new(id: String, sender: mpsc::UnboundedSender<ServerEvent>) -> Arc<Self> {
        let now = Instant::now();
        Arc::new(Self {
            id,
            sender,
            last_seen: Mutex::new(now),
            created_at: now,
        })
    }

    /// Generate a fresh connection id
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Queue an event for delivery
    ///
    /// Returns `false` when the socket's send task has already gone away.
    pub fn send(&self, event: ServerEvent) -> bool {
        self.sender.send(event).is_ok()
    }

    /// Whether the send task has dropped its end of the queue
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// Record client activity
    pub fn touch(&self) {
        *self.last_seen.lock() = Instant::now();
    }

    /// Time since the client was last heard from
    pub fn idle_for(&self) -> Duration {
        self.last_seen.lock().elapsed()
    }

    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("id", &self.id)
            .field("closed", &self.is_closed())
            .field("age", &self.age())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_is_unique() {
        let a = Connection::generate_id();
        let b = Connection::generate_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }

    #[test]
    fn test_send_queues_event() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let conn = Connection::new("c1".to_string(), tx);

        assert!(conn.send(ServerEvent::UserConnected("u1".to_string())));
        assert_eq!(
            rx.try_recv().unwrap(),
            ServerEvent::UserConnected("u1".to_string())
        );
    }

    #[test]
    fn test_send_after_receiver_dropped() {
        let (tx, rx) = mpsc::unbounded_channel();
        let conn = Connection::new("c1".to_string(), tx);
        drop(rx);

        assert!(conn.is_closed());
        assert!(!conn.send(ServerEvent::UsersOnline(Vec::new())));
    }

    #[test]
    fn test_touch_resets_idle_time() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let conn = Connection::new("c1".to_string(), tx);

        std::thread::sleep(Duration::from_millis(20));
        assert!(conn.idle_for() >= Duration::from_millis(20));

        conn.touch();
        assert!(conn.idle_for() < Duration::from_millis(20));
    }
}
