//! Presence registry
//!
//! Which users are online, on which connection, doing what.

use crate::broadcast::Broadcaster;
use crate::protocol::ServerEvent;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Activity label given to a user when they connect
pub const DEFAULT_ACTIVITY: &str = "Online";

#[derive(Debug, Clone)]
struct Presence {
    connection_id: String,
    activity: String,
}

#[derive(Debug, Default)]
struct RegistryInner {
    /// User ids in order of first registration
    order: Vec<String>,
    /// Connection and activity per user; keys always match `order`
    entries: HashMap<String, Presence>,
}

impl RegistryInner {
    fn users_online(&self) -> Vec<String> {
        self.order.clone()
    }

    fn activities(&self) -> Vec<(String, String)> {
        self.order
            .iter()
            .filter_map(|user_id| {
                self.entries
                    .get(user_id)
                    .map(|p| (user_id.clone(), p.activity.clone()))
            })
            .collect()
    }
}

/// In-memory map of online users
///
/// One user maps to at most one connection; a newer connection replaces the
/// older one. The lock is held while the resulting events are handed to the
/// broadcaster, so every client observes registry changes in the same order
/// they were applied.
pub struct PresenceRegistry {
    inner: Mutex<RegistryInner>,
    broadcaster: Arc<dyn Broadcaster>,
}

impl PresenceRegistry {
    pub fn new(broadcaster: Arc<dyn Broadcaster>) -> Self {
        Self {
            inner: Mutex::new(RegistryInner::default()),
            broadcaster,
        }
    }

    /// Register `user_id` on `connection_id`
    ///
    /// Empty or missing ids are ignored. Broadcasts `user_connected`,
    /// `users_online` and `activities`.
    pub fn connect(&self, user_id: Option<&str>, connection_id: &str) {
        let Some(user_id) = non_empty(user_id) else {
            tracing::debug!(connection_id = %connection_id, "Ignoring connect without user id");
            return;
        };

        let mut inner = self.inner.lock();

        let previous = inner.entries.insert(
            user_id.to_string(),
            Presence {
                connection_id: connection_id.to_string(),
                activity: DEFAULT_ACTIVITY.to_string(),
            },
        );
        match previous {
            Some(old) if old.connection_id != connection_id => {
                tracing::info!(
                    user_id = %user_id,
                    connection_id = %connection_id,
                    evicted = %old.connection_id,
                    "User reconnected, replacing previous connection"
                );
            }
            Some(_) => {}
            None => {
                inner.order.push(user_id.to_string());
                tracing::info!(user_id = %user_id, connection_id = %connection_id, "User online");
            }
        }

        self.broadcaster
            .broadcast(&ServerEvent::UserConnected(user_id.to_string()));
        self.broadcaster
            .broadcast(&ServerEvent::UsersOnline(inner.users_online()));
        self.broadcaster
            .broadcast(&ServerEvent::Activities(inner.activities()));
    }

    /// Replace a user's activity label
    ///
    /// Empty or missing values are ignored. The update is broadcast even for
    /// users that are not registered, but only registered users keep a label.
    pub fn update_activity(&self, user_id: Option<&str>, activity: Option<&str>) {
        let (Some(user_id), Some(activity)) = (non_empty(user_id), non_empty(activity)) else {
            return;
        };

        let mut inner = self.inner.lock();

        match inner.entries.get_mut(user_id) {
            Some(presence) => presence.activity = activity.to_string(),
            None => tracing::debug!(user_id = %user_id, "Activity update for unregistered user"),
        }

        self.broadcaster
            .broadcast(&ServerEvent::activity_updated(user_id, activity));
    }

    /// Remove whichever user is bound to `connection_id`
    ///
    /// Returns the user that went offline. A connection that was replaced by a
    /// newer one owns nothing, so its disconnect changes nothing.
    pub fn disconnect(&self, connection_id: &str) -> Option<String> {
        let mut inner = self.inner.lock();

        let user_id = inner
            .order
            .iter()
            .find(|user_id| {
                inner
                    .entries
                    .get(*user_id)
                    .is_some_and(|p| p.connection_id == connection_id)
            })
            .cloned()?;

        inner.entries.remove(&user_id);
        inner.order.retain(|u| u != &user_id);

        tracing::info!(user_id = %user_id, connection_id = %connection_id, "User offline");

        self.broadcaster
            .broadcast(&ServerEvent::UserDisconnected(user_id.clone()));
        self.broadcaster
            .broadcast(&ServerEvent::UsersOnline(inner.users_online()));

        Some(user_id)
    }

    /// Online user ids in registration order
    pub fn users_online(&self) -> Vec<String> {
        self.inner.lock().users_online()
    }

    /// `(user_id, activity)` pairs in registration order
    pub fn activities(&self) -> Vec<(String, String)> {
        self.inner.lock().activities()
    }

    pub fn connection_of(&self, user_id: &str) -> Option<String> {
        self.inner
            .lock()
            .entries
            .get(user_id)
            .map(|p| p.connection_id.clone())
    }

    pub fn activity_of(&self, user_id: &str) -> Option<String> {
        self.inner
            .lock()
            .entries
            .get(user_id)
            .map(|p| p.activity.clone())
    }

    pub fn is_online(&self, user_id: &str) -> bool {
        self.inner.lock().entries.contains_key(user_id)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for PresenceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresenceRegistry")
            .field("online", &self.len())
            .finish()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
