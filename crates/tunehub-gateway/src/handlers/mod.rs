//! Client event handlers
//!
//! Routes each parsed [`ClientEvent`] to the registry or the relay.

use crate::connection::Connection;
use crate::protocol::ClientEvent;
use crate::relay::RelayQueue;
use crate::server::GatewayState;

/// Dispatch incoming client events to the component that owns them
pub struct EventDispatcher;

impl EventDispatcher {
    /// Handle one client event
    ///
    /// Presence changes are applied synchronously; `send_message` goes onto
    /// the connection's relay queue.
    pub fn dispatch(
        state: &GatewayState,
        connection: &Connection,
        relay: &RelayQueue,
        event: ClientEvent,
    ) {
        tracing::trace!(
            connection_id = %connection.id(),
            event = event.name(),
            "Received event"
        );

        match event {
            ClientEvent::UserConnected { user_id } => {
                state.registry().connect(user_id.as_deref(), connection.id());
            }
            ClientEvent::UpdateActivity(payload) => {
                state
                    .registry()
                    .update_activity(payload.user_id.as_deref(), payload.activity.as_deref());
            }
            ClientEvent::SendMessage(payload) => {
                if !relay.push(payload) {
                    tracing::warn!(connection_id = %connection.id(), "Relay queue closed, message dropped");
                }
            }
        }
    }
}
