use super::Broadcaster;
use crate::protocol::ServerEvent;
use parking_lot::Mutex;
use std::collections::HashSet;

/// Where a recorded event was sent
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Sent {
    All(ServerEvent),
    To(String, ServerEvent),
}

/// Broadcaster that remembers what it was asked to deliver
#[derive(Debug, Default)]
pub(crate) struct RecordingBroadcaster {
    sent: Mutex<Vec<Sent>>,
    live: Mutex<HashSet<String>>,
}

impl RecordingBroadcaster {
    /// Mark connection ids that `send_to` should report as delivered
    pub(crate) fn with_live<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sent: Mutex::default(),
            live: Mutex::new(ids.into_iter().map(Into::into).collect()),
        }
    }

    pub(crate) fn take(&self) -> Vec<Sent> {
        std::mem::take(&mut *self.sent.lock())
    }

    /// Names of broadcast events, in order
    pub(crate) fn broadcast_names(&self) -> Vec<&'static str> {
        self.sent
            .lock()
            .iter()
            .filter_map(|s| match s {
                Sent::All(event) => Some(event.name()),
                Sent::To(..) => None,
            })
            .collect()
    }
}

impl Broadcaster for RecordingBroadcaster {
    fn broadcast(&self, event: &ServerEvent) {
        self.sent.lock().push(Sent::All(event.clone()));
    }

    fn send_to(&self, connection_id: &str, event: &ServerEvent) -> bool {
        self.sent
            .lock()
            .push(Sent::To(connection_id.to_string(), event.clone()));
        self.live.lock().contains(connection_id)
    }
}
