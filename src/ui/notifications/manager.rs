// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! Every pushed notification is visible at once, oldest first. Each one
//! dismisses itself once it has been shown for the configured lifetime,
//! whatever its severity.

use super::notification::{Notification, NotificationId, Severity};
use crate::app::config::DEFAULT_NOTIFICATION_DISMISS_SECS;
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

/// Holds the visible notification stack.
#[derive(Debug)]
pub struct Manager {
    /// Visible notifications, newest last.
    visible: Vec<Notification>,
    lifetime: Duration,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_NOTIFICATION_DISMISS_SECS))
    }
}

impl Manager {
    /// Creates an empty manager whose notifications live for `lifetime`.
    #[must_use]
    pub fn new(lifetime: Duration) -> Self {
        Self {
            visible: Vec::new(),
            lifetime,
        }
    }

    /// Adds a notification to the bottom of the stack.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Error => {
                tracing::debug!(key = notification.message_key(), "error notification")
            }
            Severity::Warning => {
                tracing::debug!(key = notification.message_key(), "warning notification")
            }
            Severity::Success | Severity::Info => {}
        }
        self.visible.push(notification);
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            true
        } else {
            false
        }
    }

    /// Removes notifications that are expired at `now`.
    pub fn tick_at(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.visible.retain(|n| !n.is_expired(now, lifetime));
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Visible notifications, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty()
    }

    pub fn clear(&mut self) {
        self.visible.clear();
    }
}
