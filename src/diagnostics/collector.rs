// SPDX-License-Identifier: MPL-2.0
//! Diagnostics handle for recording events.
//!
//! Every recorded event is stored in a bounded buffer and mirrored as a
//! `tracing` event under the `cedric_plans::diagnostics` target.

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use super::buffer::{CircularBuffer, DEFAULT_CAPACITY};
use super::events::{AppEvent, DiagnosticEvent, DiagnosticEventKind, UserAction};
use super::report::{self, DiagnosticReport};
use crate::error::{Error, Result};

/// Cheap-to-clone handle shared by every component that records events.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    buffer: Arc<Mutex<CircularBuffer<DiagnosticEvent>>>,
    started: Instant,
}

impl Default for DiagnosticsHandle {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl DiagnosticsHandle {
    /// Creates a handle backed by a buffer of `capacity` events.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(CircularBuffer::new(capacity))),
            started: Instant::now(),
        }
    }

    /// Records a user action.
    pub fn log_action(&self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    /// Records a user action with free-form details.
    pub fn log_action_with_details(&self, action: UserAction, details: Option<String>) {
        match &details {
            Some(details) => tracing::debug!(
                target: "cedric_plans::diagnostics",
                %action,
                details = %details,
                "user action"
            ),
            None => tracing::debug!(target: "cedric_plans::diagnostics", %action, "user action"),
        }
        self.push(DiagnosticEventKind::UserAction { action, details });
    }

    /// Records an application outcome.
    pub fn log_event(&self, event: AppEvent) {
        match &event {
            AppEvent::ImageLoadFailed { .. } => {
                tracing::debug!(target: "cedric_plans::diagnostics", %event, "app event");
            }
            AppEvent::QuoteFailed { .. } | AppEvent::ConfigWarning { .. } => {
                tracing::warn!(target: "cedric_plans::diagnostics", %event, "app event");
            }
            AppEvent::PlanResolved { .. } | AppEvent::QuoteSubmitted => {
                tracing::info!(target: "cedric_plans::diagnostics", %event, "app event");
            }
        }
        self.push(DiagnosticEventKind::App(event));
    }

    fn push(&self, kind: DiagnosticEventKind) {
        // A poisoned lock only means another thread panicked mid-push; the
        // buffer itself is still consistent.
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(DiagnosticEvent::new(kind));
    }

    /// Copies the recorded events, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<DiagnosticEvent> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    /// Builds a report of the recorded events.
    #[must_use]
    pub fn report(&self) -> DiagnosticReport {
        DiagnosticReport::new(self.started, &self.snapshot())
    }

    /// Writes the report as JSON to `path` and returns the event count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Diagnostics`] if serialization fails and
    /// [`Error::Io`] if the file cannot be written.
    pub fn write_report(&self, path: &Path) -> Result<usize> {
        let report = self.report();
        let json = report
            .to_json()
            .map_err(|e| Error::Diagnostics(e.to_string()))?;
        report::write_atomic(path, &json)?;
        Ok(report.event_count)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_buffer() {
        let handle = DiagnosticsHandle::new(10);
        let clone = handle.clone();
        clone.log_action(UserAction::OpenListing);
        handle.log_event(AppEvent::QuoteSubmitted);
        assert_eq!(handle.len(), 2);
    }

    #[test]
    fn snapshot_is_chronological_and_bounded() {
        let handle = DiagnosticsHandle::new(2);
        handle.log_action(UserAction::OpenGallery);
        handle.log_action(UserAction::NextImage);
        handle.log_action(UserAction::CloseGallery);

        let kinds: Vec<_> = handle.snapshot().into_iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticEventKind::UserAction {
                    action: UserAction::NextImage,
                    details: None
                },
                DiagnosticEventKind::UserAction {
                    action: UserAction::CloseGallery,
                    details: None
                },
            ]
        );
    }

    #[test]
    fn report_file_holds_recorded_events() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("diagnostics.json");
        let handle = DiagnosticsHandle::default();
        handle.log_action(UserAction::OpenGallery);
        handle.log_event(AppEvent::PlanResolved {
            plan_id: "3".into(),
            source: "catalog",
        });

        assert_eq!(handle.write_report(&path).expect("report written"), 2);

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("read report"))
                .expect("valid json");
        assert_eq!(json["event_count"], 2);
        assert_eq!(json["events"][1]["event"]["data"]["source"], "catalog");
    }

    #[test]
    fn report_to_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent").join("diagnostics.json");
        let result = DiagnosticsHandle::default().write_report(&path);
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn details_are_kept() {
        let handle = DiagnosticsHandle::default();
        handle.log_action_with_details(UserAction::OpenQuote, Some("navbar".into()));
        assert!(matches!(
            &handle.snapshot()[0].kind,
            DiagnosticEventKind::UserAction { details: Some(d), .. } if d == "navbar"
        ));
    }
}
