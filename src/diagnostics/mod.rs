// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for capturing activity events.
//!
//! Events are kept in a memory-bounded circular buffer for inspection and
//! mirrored to `tracing`, so `RUST_LOG=cedric_plans::diagnostics=debug`
//! shows a live activity trail.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with fixed capacity
//! - [`DiagnosticEvent`]: A captured [`UserAction`] or [`AppEvent`]
//! - [`DiagnosticsHandle`]: Shared recorder handed to components
//! - [`DiagnosticReport`]: JSON export written on exit with `--diagnostics`
//!
//! # Privacy
//!
//! Contact and payment details are never recorded. Purchase progress is
//! captured by stage name only.

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{CircularBuffer, DEFAULT_CAPACITY};
pub use collector::DiagnosticsHandle;
pub use events::{AppEvent, DiagnosticEvent, DiagnosticEventKind, UserAction};
pub use report::{DiagnosticReport, ReportEntry};
