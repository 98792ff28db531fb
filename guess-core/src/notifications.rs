use guess_types::{Notification, NotificationId};
use std::time::Instant;

#[derive(Debug, Clone)]
struct QueuedNotification {
    notification: Notification,
    expires_at: Instant,
}

/// Live result announcements, newest first. Each entry expires on its own
/// deadline; there is no cap on how many are visible at once.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    entries: Vec<QueuedNotification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, notification: Notification, expires_at: Instant) {
        self.entries.insert(
            0,
            QueuedNotification {
                notification,
                expires_at,
            },
        );
    }

    /// Removes the notification if it is still live. Removing an unknown or
    /// already removed id is a no-op.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|queued| queued.notification.id != id);
        self.entries.len() != before
    }

    /// Sweeps every notification whose deadline has passed and returns their ids.
    pub fn expire_due(&mut self, now: Instant) -> Vec<NotificationId> {
        let mut expired = Vec::new();
        self.entries.retain(|queued| {
            if queued.expires_at <= now {
                expired.push(queued.notification.id);
                false
            } else {
                true
            }
        });
        expired
    }

    pub fn contains(&self, id: NotificationId) -> bool {
        self.entries.iter().any(|queued| queued.notification.id == id)
    }

    pub fn expires_at(&self, id: NotificationId) -> Option<Instant> {
        self.entries
            .iter()
            .find(|queued| queued.notification.id == id)
            .map(|queued| queued.expires_at)
    }

    /// Notification at a 1-based position in the visible stack.
    pub fn get_by_position(&self, position: usize) -> Option<&Notification> {
        position
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
            .map(|queued| &queued.notification)
    }

    pub fn snapshot(&self) -> Vec<Notification> {
        self.entries
            .iter()
            .map(|queued| queued.notification.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
