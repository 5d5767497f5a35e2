//! Event broadcasting
//!
//! The seam between state changes and the sockets that hear about them.

#[cfg(test)]
mod recording;

#[cfg(test)]
pub(crate) use recording::{RecordingBroadcaster, Sent};

use crate::protocol::ServerEvent;

/// Delivers server events to connections
///
/// Implementations only enqueue; they must not block on socket I/O, since
/// callers may hold the presence lock while fanning out.
pub trait Broadcaster: Send + Sync {
    /// Deliver to every live connection
    fn broadcast(&self, event: &ServerEvent);

    /// Deliver to one connection, returning whether it was still there
    fn send_to(&self, connection_id: &str, event: &ServerEvent) -> bool;
}
