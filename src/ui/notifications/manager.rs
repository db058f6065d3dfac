// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of
//! notifications. It limits the number of visible toasts and expires them
//! on tick.

use super::notification::{Notification, NotificationId};
use crate::app::config::MAX_VISIBLE_NOTIFICATIONS;
use std::collections::VecDeque;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    /// Periodic check of auto-dismiss timers.
    Tick,
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Waiting for a visible slot.
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` now, or queues it while
    /// `MAX_VISIBLE_NOTIFICATIONS` toasts are already showing.
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE_NOTIFICATIONS {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses every visible notification that has expired at `now`.
    pub fn tick_at(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.is_expired_at(now))
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => self.tick_at(Instant::now()),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Drives the tick subscription.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE_NOTIFICATIONS {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_back(notification),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE_NOTIFICATIONS {
            manager.push(Notification::success(format!("test-{i}")));
        }
        manager.push(Notification::success("queued"));

        assert_eq!(manager.visible_count(), MAX_VISIBLE_NOTIFICATIONS);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        let first = Notification::success("visible-0");
        let first_id = first.id();
        manager.push(first);
        for i in 1..=MAX_VISIBLE_NOTIFICATIONS {
            manager.push(Notification::success(format!("n-{i}")));
        }

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible_count(), MAX_VISIBLE_NOTIFICATIONS);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let fake_id = Notification::success("temp").id();
        assert!(!manager.dismiss(fake_id));
    }

    #[test]
    fn tick_expires_success_but_keeps_errors() {
        let mut manager = Manager::new();
        manager.push(Notification::success("Request Sent"));
        let error = Notification::error("Submission Failed");
        let error_id = error.id();
        manager.push(error);

        manager.tick_at(Instant::now() + Duration::from_secs(60));

        let remaining: Vec<_> = manager.visible().map(Notification::id).collect();
        assert_eq!(remaining, vec![error_id]);

        manager.handle_message(&Message::Dismiss(error_id));
        assert!(!manager.has_notifications());
    }
}
