//! Message entity - a direct chat message between two users

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Direct message entity
///
/// Sender and receiver are external user IDs (the identifiers clients announce
/// on the gateway). Messages are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Snowflake,
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Message {
    pub fn new(id: Snowflake, sender_id: String, receiver_id: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            sender_id,
            receiver_id,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this message belongs to the conversation between two users,
    /// in either direction
    pub fn is_between(&self, user_a: &str, user_b: &str) -> bool {
        (self.sender_id == user_a && self.receiver_id == user_b)
            || (self.sender_id == user_b && self.receiver_id == user_a)
    }
}
