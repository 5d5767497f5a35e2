//! Message service
//!
//! Validates and persists direct messages and reads conversations back.
//! Delivery to live sockets is the gateway's job.

use tracing::{info, instrument};
use tunehub_core::entities::Message;
use tunehub_core::DomainError;

use crate::dto::MessageResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate and persist a direct message
    ///
    /// Sender and receiver must be present and non-empty, and the content must
    /// contain something other than whitespace. Content is stored verbatim.
    #[instrument(skip(self, content))]
    pub async fn send_direct(
        &self,
        sender_id: Option<&str>,
        receiver_id: Option<&str>,
        content: Option<&str>,
    ) -> ServiceResult<Message> {
        let (sender_id, receiver_id, content) = match (sender_id, receiver_id, content) {
            (Some(s), Some(r), Some(c)) if !s.is_empty() && !r.is_empty() && !c.trim().is_empty() => {
                (s, r, c)
            }
            _ => return Err(DomainError::InvalidMessage.into()),
        };

        let message = Message::new(
            self.ctx.generate_id(),
            sender_id.to_string(),
            receiver_id.to_string(),
            content.to_string(),
        );
        self.ctx.message_repo().create(&message).await?;

        info!(message_id = %message.id, "Message stored");
        Ok(message)
    }

    /// Both directions of the conversation between two users, oldest first
    #[instrument(skip(self))]
    pub async fn conversation(
        &self,
        user_id: &str,
        other_user_id: &str,
    ) -> ServiceResult<Vec<MessageResponse>> {
        let messages = self
            .ctx
            .message_repo()
            .find_conversation(user_id, other_user_id)
            .await?;

        Ok(messages.into_iter().map(MessageResponse::from).collect())
    }
}
