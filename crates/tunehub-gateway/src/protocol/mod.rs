//! Gateway protocol definitions
//!
//! Event names and payload shapes exchanged over the socket.

mod messages;

pub use messages::{
    ActivityPayload, ActivityUpdate, ClientEvent, ProtocolError, SendMessagePayload, ServerEvent,
};
