// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard events are only listened to while an overlay is open; the rest
//! of the UI is driven by widgets alone.

use super::Message;
use crate::ui::gallery::NavKey;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval at which notifications are checked for expiry.
const NOTIFICATION_TICK: Duration = Duration::from_millis(250);

/// Routes Escape and the arrow keys to the open overlay.
///
/// Arrow keys already handled by a widget (for example a focused text
/// input) are not forwarded. Escape always is.
pub fn create_overlay_keys_subscription(overlay_open: bool) -> Subscription<Message> {
    if !overlay_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window| {
        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
            return None;
        };
        let nav = match key {
            Key::Named(Named::Escape) => return Some(Message::Key(NavKey::Close)),
            Key::Named(Named::ArrowLeft) => NavKey::Previous,
            Key::Named(Named::ArrowRight) => NavKey::Next,
            _ => return None,
        };
        match status {
            event::Status::Ignored => Some(Message::Key(nav)),
            event::Status::Captured => None,
        }
    })
}

/// Ticks while notifications are visible so they can expire.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(NOTIFICATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
