//! Direct message relay
//!
//! Persists a chat message, then hands it to the receiver's socket if they are
//! online. Nothing is queued for offline receivers; they read the history over
//! the REST API.

use crate::broadcast::Broadcaster;
use crate::presence::PresenceRegistry;
use crate::protocol::{SendMessagePayload, ServerEvent};
use std::sync::Arc;
use tokio::sync::mpsc;
use tunehub_service::{MessageResponse, MessageService, ServiceContext};

pub struct MessageRelay {
    service_context: Arc<ServiceContext>,
    registry: Arc<PresenceRegistry>,
    broadcaster: Arc<dyn Broadcaster>,
}

impl MessageRelay {
    pub fn new(
        service_context: Arc<ServiceContext>,
        registry: Arc<PresenceRegistry>,
        broadcaster: Arc<dyn Broadcaster>,
    ) -> Self {
        Self {
            service_context,
            registry,
            broadcaster,
        }
    }

    /// Handle a `send_message` from `from_connection`
    ///
    /// On success the receiver (if online) gets `receiver_message` and the
    /// sender gets `message_sent`. Any failure is reported to the sender alone
    /// as `message_error` carrying the error text; nothing is retried.
    pub async fn send(&self, from_connection: &str, payload: SendMessagePayload) {
        let service = MessageService::new(&self.service_context);

        let result = service
            .send_direct(
                payload.sender_id.as_deref(),
                payload.receiver_id.as_deref(),
                payload.content.as_deref(),
            )
            .await;

        let message = match result {
            Ok(message) => MessageResponse::from(message),
            Err(e) => {
                tracing::error!(
                    connection_id = %from_connection,
                    sender_id = ?payload.sender_id,
                    receiver_id = ?payload.receiver_id,
                    error = %e,
                    "Failed to send message"
                );
                self.broadcaster.send_to(
                    from_connection,
                    &ServerEvent::MessageError(e.to_string()),
                );
                return;
            }
        };

        if let Some(receiver_connection) = self.registry.connection_of(&message.receiver_id) {
            let delivered = self.broadcaster.send_to(
                &receiver_connection,
                &ServerEvent::ReceiverMessage(message.clone()),
            );
            tracing::debug!(
                message_id = %message.id,
                receiver_id = %message.receiver_id,
                delivered,
                "Relayed message to receiver"
            );
        }

        self.broadcaster
            .send_to(from_connection, &ServerEvent::MessageSent(message));
    }
}

impl std::fmt::Debug for MessageRelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageRelay")
            .field("registry", &self.registry)
            .finish()
    }
}

/// Outgoing chat messages of one connection
///
/// Messages are relayed one at a time in arrival order on a task of their
/// own, so the socket keeps reading presence events and pongs while a write
/// is pending. Dropping the queue lets the task finish what is already queued.
pub struct RelayQueue {
    tx: mpsc::UnboundedSender<SendMessagePayload>,
}

impl RelayQueue {
    pub fn spawn(relay: Arc<MessageRelay>, connection_id: String) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<SendMessagePayload>();

        tokio::spawn(async move {
            while let Some(payload) = rx.recv().await {
                relay.send(&connection_id, payload).await;
            }
            tracing::trace!(connection_id = %connection_id, "Relay queue drained");
        });

        Self { tx }
    }

    /// Queue a message; false once the relay task is gone
    pub fn push(&self, payload: SendMessagePayload) -> bool {
        self.tx.send(payload).is_ok()
    }
}
