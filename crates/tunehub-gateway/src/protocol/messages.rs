//! Gateway message envelopes
//!
//! Every frame is a JSON text frame of the form `{"event": "...", "data": ...}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tunehub_service::MessageResponse;

/// Raw inbound frame before the event name is resolved
#[derive(Debug, Deserialize)]
struct Envelope {
    event: String,
    #[serde(default)]
    data: Value,
}

/// Payload of `update_activity`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPayload {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub activity: Option<String>,
}

/// Payload of `send_message`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessagePayload {
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub receiver_id: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Events a client may send
///
/// Fields are optional so that incomplete payloads still reach the handlers,
/// which treat missing values as a no-op or a validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    UserConnected { user_id: Option<String> },
    UpdateActivity(ActivityPayload),
    SendMessage(SendMessagePayload),
}

/// Why an inbound frame could not be turned into a [`ClientEvent`]
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("malformed frame: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("unknown event: {0}")]
    UnknownEvent(String),
}

impl ClientEvent {
    /// Parse a text frame
    pub fn from_json(text: &str) -> Result<Self, ProtocolError> {
        let Envelope { event, data } = serde_json::from_str(text)?;

        match event.as_str() {
            "user_connected" => Ok(Self::UserConnected {
                // anything but a string id is treated as absent
                user_id: match data {
                    Value::String(id) => Some(id),
                    _ => None,
                },
            }),
            "update_activity" => Ok(Self::UpdateActivity(payload_or_default(data)?)),
            "send_message" => Ok(Self::SendMessage(payload_or_default(data)?)),
            _ => Err(ProtocolError::UnknownEvent(event)),
        }
    }

    /// Event name as it appears on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Self::UserConnected { .. } => "user_connected",
            Self::UpdateActivity(_) => "update_activity",
            Self::SendMessage(_) => "send_message",
        }
    }
}

fn payload_or_default<T>(data: Value) -> Result<T, serde_json::Error>
where
    T: Default + for<'de> Deserialize<'de>,
{
    if data.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(data)
}

/// Data of `activity_updated`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityUpdate {
    pub user_id: String,
    pub activity: String,
}

/// Events the gateway sends
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    /// A user came online
    UserConnected(String),
    /// Every online user, in registration order
    UsersOnline(Vec<String>),
    /// `[userId, activity]` pairs, in registration order
    Activities(Vec<(String, String)>),
    ActivityUpdated(ActivityUpdate),
    /// Delivered to the recipient of a direct message
    ReceiverMessage(MessageResponse),
    /// Echoed to the sender once the message is stored
    MessageSent(MessageResponse),
    MessageError(String),
    UserDisconnected(String),
}

impl ServerEvent {
    pub fn activity_updated(user_id: impl Into<String>, activity: impl Into<String>) -> Self {
        Self::ActivityUpdated(ActivityUpdate {
            user_id: user_id.into(),
            activity: activity.into(),
        })
    }

    /// Event name as it appears on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Self::UserConnected(_) => "user_connected",
            Self::UsersOnline(_) => "users_online",
            Self::Activities(_) => "activities",
            Self::ActivityUpdated(_) => "activity_updated",
            Self::ReceiverMessage(_) => "receiver_message",
            Self::MessageSent(_) => "message_sent",
            Self::MessageError(_) => "message_error",
            Self::UserDisconnected(_) => "user_disconnected",
        }
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl std::fmt::Display for ServerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
