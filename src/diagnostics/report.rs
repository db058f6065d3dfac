// SPDX-License-Identifier: MPL-2.0
//! Diagnostic report generation and JSON export.
//!
//! The report is written once, when the window closes, if the app was started
//! with `--diagnostics <FILE>`.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use super::events::{DiagnosticEvent, DiagnosticEventKind};

/// Activity trail of one session.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DiagnosticReport {
    pub app_version: &'static str,
    /// Milliseconds between the first recorder and the report.
    pub collection_duration_ms: u64,
    pub event_count: usize,
    pub events: Vec<ReportEntry>,
}

/// One recorded event with its offset from the start of collection.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportEntry {
    pub elapsed_ms: u64,
    pub event: DiagnosticEventKind,
}

impl DiagnosticReport {
    /// Builds a report from events recorded since `started`.
    #[must_use]
    pub fn new(started: Instant, events: &[DiagnosticEvent]) -> Self {
        let since_start = |at: Instant| millis(at.saturating_duration_since(started).as_millis());
        Self {
            app_version: env!("CARGO_PKG_VERSION"),
            collection_duration_ms: since_start(Instant::now()),
            event_count: events.len(),
            events: events
                .iter()
                .map(|event| ReportEntry {
                    elapsed_ms: since_start(event.timestamp),
                    event: event.kind.clone(),
                })
                .collect(),
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn millis(value: u128) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}

/// Writes content through a `.tmp` sibling and renames it into place, so an
/// interrupted write never leaves a truncated report.
///
/// # Errors
///
/// Returns an error if writing or renaming fails.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{AppEvent, UserAction};
    use tempfile::tempdir;

    fn sample() -> Vec<DiagnosticEvent> {
        vec![
            DiagnosticEvent::new(DiagnosticEventKind::UserAction {
                action: UserAction::SelectImage { index: 2 },
                details: None,
            }),
            DiagnosticEvent::new(DiagnosticEventKind::App(AppEvent::QuoteSubmitted)),
        ]
    }

    #[test]
    fn report_counts_and_orders_events() {
        let started = Instant::now();
        let report = DiagnosticReport::new(started, &sample());
        assert_eq!(report.event_count, 2);
        assert!(report.events[0].elapsed_ms <= report.events[1].elapsed_ms);
    }

    #[test]
    fn json_tags_events_by_name() {
        let report = DiagnosticReport::new(Instant::now(), &sample());
        let json: serde_json::Value =
            serde_json::from_str(&report.to_json().expect("serializable")).expect("valid json");

        let first = &json["events"][0]["event"];
        assert_eq!(first["kind"], "user_action");
        assert_eq!(first["data"]["action"]["action"], "select_image");
        assert_eq!(first["data"]["action"]["index"], 2);

        let second = &json["events"][1]["event"];
        assert_eq!(second["kind"], "app");
        assert_eq!(second["data"]["event"], "quote_submitted");
    }

    #[test]
    fn write_atomic_replaces_file_and_leaves_no_temp() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("report.json");
        fs::write(&path, "old").expect("seed file");

        write_atomic(&path, "{}").expect("write report");

        assert_eq!(fs::read_to_string(&path).expect("read back"), "{}");
        assert!(!path.with_extension("json.tmp").exists());
    }
}
