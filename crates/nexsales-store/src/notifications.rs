//! Transient user-facing notifications.

use std::sync::Arc;

use chrono::Utc;
use nexsales_core::models::notification::{NewNotification, Notification};
use tokio::sync::watch;
use tracing::debug;

use crate::ids::IdGenerator;

/// Most notifications retained; older ones are dropped.
pub const MAX_NOTIFICATIONS: usize = 50;

/// Newest-first list of notifications, capped at [`MAX_NOTIFICATIONS`].
#[derive(Clone)]
pub struct NotificationStore {
    state: Arc<watch::Sender<Vec<Notification>>>,
    ids: Arc<IdGenerator>,
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(watch::Sender::new(Vec::new())),
            ids: Arc::new(IdGenerator::new()),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Notification>> {
        self.state.subscribe()
    }

    /// All retained notifications, newest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.state.borrow().clone()
    }

    pub fn unread(&self) -> Vec<Notification> {
        self.state
            .borrow()
            .iter()
            .filter(|n| !n.read)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stamp, prepend, and trim to the newest [`MAX_NOTIFICATIONS`].
    pub fn add_notification(&self, input: NewNotification) -> Notification {
        let notification = Notification {
            id: self.ids.next_id(),
            kind: input.kind,
            message: input.message,
            timestamp: Utc::now(),
            read: false,
        };

        self.state.send_modify(|list| {
            list.insert(0, notification.clone());
            list.truncate(MAX_NOTIFICATIONS);
        });
        debug!(id = %notification.id, kind = ?notification.kind, "Added notification");
        notification
    }

    /// Flag the notification as read. Returns `false` if it is gone or
    /// was already read.
    pub fn mark_as_read(&self, id: &str) -> bool {
        self.state.send_if_modified(|list| {
            match list.iter_mut().find(|n| n.id == id && !n.read) {
                Some(n) => {
                    n.read = true;
                    true
                }
                None => false,
            }
        })
    }

    pub fn clear_notifications(&self) {
        self.state.send_modify(Vec::clear);
    }
}
