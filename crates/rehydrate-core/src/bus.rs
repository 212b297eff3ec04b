//! Post-activation notification dispatch.
//!
//! Two independent channels per component key: a "load" channel fired for
//! every successful activation of the key, and a "load-for-reason" channel
//! fired only for listeners registered on the exact (key, reason) pair.
//! Listener lifetime is the caller's responsibility; nothing is removed
//! implicitly.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::trace;
use uuid::Uuid;

use rehydrate_protocols::{ComponentKey, ReloadReason, Section};

/// Notification payload delivered to listeners after an activation.
#[derive(Debug, Clone)]
pub struct LoadEvent {
    /// The activated component key.
    pub key: ComponentKey,
    /// The section the activation ran against.
    pub section: Section,
    /// The reason the pass was running under.
    pub reason: ReloadReason,
    /// When the notification was emitted.
    pub emitted_at: DateTime<Utc>,
}

/// Listener callback invoked with each matching [`LoadEvent`].
pub type LoadListener = Arc<dyn Fn(&LoadEvent) + Send + Sync>;

/// Identity of a registered listener, used for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(Uuid);

impl ListenerId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

struct Subscription {
    id: ListenerId,
    listener: LoadListener,
}

/// Two-channel publish/subscribe structure for activation notifications.
///
/// Dispatch order among listeners on the same channel follows registration
/// order. Listener lists are cloned out of the lock before invocation, so
/// a listener may itself subscribe or unsubscribe.
pub struct NotificationBus {
    load: RwLock<HashMap<ComponentKey, Vec<Subscription>>>,
    reason: RwLock<HashMap<(ComponentKey, ReloadReason), Vec<Subscription>>>,
}

impl NotificationBus {
    /// Create a bus with no listeners.
    pub fn new() -> Self {
        Self {
            load: RwLock::new(HashMap::new()),
            reason: RwLock::new(HashMap::new()),
        }
    }

    /// Subscribe to every activation of `key`.
    pub fn on_load(&self, key: impl Into<ComponentKey>, listener: LoadListener) -> ListenerId {
        let id = ListenerId::new();
        self.load
            .write()
            .entry(key.into())
            .or_default()
            .push(Subscription { id, listener });
        id
    }

    /// Subscribe to activations of `key` under exactly `reason`.
    pub fn on_reason(
        &self,
        key: impl Into<ComponentKey>,
        reason: ReloadReason,
        listener: LoadListener,
    ) -> ListenerId {
        let id = ListenerId::new();
        self.reason
            .write()
            .entry((key.into(), reason))
            .or_default()
            .push(Subscription { id, listener });
        id
    }

    /// Remove a load listener by identity. Returns `true` if it was
    /// registered.
    pub fn remove_load_listener(&self, key: &str, id: ListenerId) -> bool {
        let mut channels = self.load.write();
        match channels.get_mut(key) {
            Some(subscriptions) => {
                let before = subscriptions.len();
                subscriptions.retain(|s| s.id != id);
                subscriptions.len() != before
            }
            None => false,
        }
    }

    /// Remove a reason listener by identity. Returns `true` if it was
    /// registered.
    pub fn remove_reason_listener(&self, key: &str, reason: ReloadReason, id: ListenerId) -> bool {
        let mut channels = self.reason.write();
        match channels.get_mut(&(key.to_string(), reason)) {
            Some(subscriptions) => {
                let before = subscriptions.len();
                subscriptions.retain(|s| s.id != id);
                subscriptions.len() != before
            }
            None => false,
        }
    }

    /// Fire the generic load channel for `key`.
    ///
    /// Called by the loader after a successful activation, before the
    /// reason-specific channel.
    pub fn emit_load(&self, key: &str, section: &Section, reason: ReloadReason) {
        let listeners: Vec<LoadListener> = match self.load.read().get(key) {
            Some(subscriptions) => subscriptions.iter().map(|s| s.listener.clone()).collect(),
            None => return,
        };

        trace!(component = %key, %reason, "emitting load notification");
        let event = LoadEvent {
            key: key.to_string(),
            section: section.clone(),
            reason,
            emitted_at: Utc::now(),
        };
        for listener in listeners {
            listener(&event);
        }
    }

    /// Fire the (key, reason) channel.
    pub fn emit_reason(&self, key: &str, section: &Section, reason: ReloadReason) {
        let listeners: Vec<LoadListener> =
            match self.reason.read().get(&(key.to_string(), reason)) {
                Some(subscriptions) => subscriptions.iter().map(|s| s.listener.clone()).collect(),
                None => return,
            };

        trace!(component = %key, %reason, "emitting reason notification");
        let event = LoadEvent {
            key: key.to_string(),
            section: section.clone(),
            reason,
            emitted_at: Utc::now(),
        };
        for listener in listeners {
            listener(&event);
        }
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
