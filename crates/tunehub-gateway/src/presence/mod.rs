//! Presence tracking

mod registry;

pub use registry::{PresenceRegistry, DEFAULT_ACTIVITY};
