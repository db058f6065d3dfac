// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! # Components
//!
//! - [`Notification`] with a [`Severity`] level
//! - [`Manager`] for queuing and lifecycle management
//! - [`Toast`] for rendering
//!
//! Success and info toasts last about 3 s, warnings about 5 s. Errors stay
//! until dismissed. At most three are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
