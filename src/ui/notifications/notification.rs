// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::app::config::{NOTIFICATION_LONG_MS, NOTIFICATION_SHORT_MS};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    /// Stays until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => {
                Some(Duration::from_millis(NOTIFICATION_SHORT_MS))
            }
            Severity::Warning => Some(Duration::from_millis(NOTIFICATION_LONG_MS)),
            Severity::Error => None,
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    title: Option<String>,
    message: String,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            title: None,
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Adds a bold heading above the message.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns whether this notification has outlived its severity's duration
    /// at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.severity
            .auto_dismiss_duration()
            .is_some_and(|d| now.saturating_duration_since(self.created_at) >= d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn error_severity_has_no_auto_dismiss() {
        assert!(Severity::Error.auto_dismiss_duration().is_none());
        let n = Notification::error("boom");
        assert!(!n.is_expired_at(Instant::now() + Duration::from_secs(3600)));
    }

    #[test]
    fn warning_duration_is_longer_than_success() {
        let success = Severity::Success.auto_dismiss_duration().unwrap();
        let warning = Severity::Warning.auto_dismiss_duration().unwrap();
        assert!(warning > success);
    }

    #[test]
    fn success_expires_after_its_duration() {
        let n = Notification::success("saved");
        assert!(!n.is_expired_at(Instant::now()));
        assert!(n.is_expired_at(Instant::now() + Duration::from_millis(NOTIFICATION_SHORT_MS)));
    }

    #[test]
    fn title_is_optional() {
        let n = Notification::error("Please try again").with_title("Submission Failed");
        assert_eq!(n.title(), Some("Submission Failed"));
        assert_eq!(n.message(), "Please try again");
        assert!(Notification::info("x").title().is_none());
    }
}
