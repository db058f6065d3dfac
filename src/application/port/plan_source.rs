// SPDX-License-Identifier: MPL-2.0
//! Plan source port definition.
//!
//! This module defines the [`PlanSource`] trait for fetching one plan payload
//! from the storefront API, and the [`CancellationToken`] that lets the
//! detail page abandon a fetch it no longer needs.
//!
//! # Design Notes
//!
//! - One attempt per call; callers decide what to do on failure
//! - Non-2xx responses are errors, not empty payloads
//! - Futures are boxed so sources can live behind `Arc<dyn PlanSource>`

use crate::domain::plan::{PlanId, RawPlan};
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;

pub use futures_util::future::BoxFuture;

// =============================================================================
// FetchError
// =============================================================================

/// Errors that can occur while fetching a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// No endpoint is configured for this request.
    NotConfigured,

    /// The request could not be sent or the connection failed.
    Network(String),

    /// The server answered with a non-success status code.
    Status(u16),

    /// The response body was not a valid plan payload.
    Decode(String),

    /// The fetch was abandoned before it completed.
    Cancelled,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NotConfigured => write!(f, "no plan endpoint configured"),
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Status(code) => write!(f, "server responded with HTTP {code}"),
            FetchError::Decode(msg) => write!(f, "invalid plan payload: {msg}"),
            FetchError::Cancelled => write!(f, "request cancelled"),
        }
    }
}

impl std::error::Error for FetchError {}

// =============================================================================
// CancellationToken
// =============================================================================

/// Shared signal telling an in-flight request that nobody waits for it.
///
/// Clones share the same signal. Adapters race their I/O against
/// [`cancelled`](Self::cancelled) so an abandoned request drops its
/// connection immediately instead of running into the client timeout.
#[derive(Debug, Clone)]
pub struct CancellationToken(Arc<watch::Sender<bool>>);

impl Default for CancellationToken {
    fn default() -> Self {
        let (sender, _) = watch::channel(false);
        Self(Arc::new(sender))
    }
}

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.send_replace(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.0.borrow()
    }

    /// Completes once [`cancel`](Self::cancel) has been called on any clone.
    pub async fn cancelled(&self) {
        let mut receiver = self.0.subscribe();
        // The sender lives in `self`, so the channel cannot close here.
        let _ = receiver.wait_for(|cancelled| *cancelled).await;
    }
}

// =============================================================================
// PlanSource
// =============================================================================

/// Remote source of plan payloads.
pub trait PlanSource: Send + Sync {
    /// Fetches the raw payload for `id`.
    ///
    /// Implementations stop waiting on the network as soon as `cancel` fires
    /// and return [`FetchError::Cancelled`].
    fn fetch_plan<'a>(
        &'a self,
        id: &'a PlanId,
        cancel: &'a CancellationToken,
    ) -> BoxFuture<'a, Result<RawPlan, FetchError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_clones_share_state() {
        let token = CancellationToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[tokio::test]
    async fn cancelled_wakes_pending_waiter() {
        let token = CancellationToken::new();
        let waiter = token.clone();
        let handle = tokio::spawn(async move { waiter.cancelled().await });
        tokio::task::yield_now().await;
        token.cancel();
        tokio::time::timeout(std::time::Duration::from_secs(1), handle)
            .await
            .expect("waiter woke up")
            .expect("task joined");
    }

    #[tokio::test]
    async fn cancelled_returns_at_once_when_already_cancelled() {
        let token = CancellationToken::new();
        token.cancel();
        tokio::time::timeout(std::time::Duration::from_millis(100), token.cancelled())
            .await
            .expect("already cancelled");
    }

    #[test]
    fn fetch_error_display() {
        assert_eq!(
            FetchError::Status(404).to_string(),
            "server responded with HTTP 404"
        );
        assert_eq!(FetchError::Cancelled.to_string(), "request cancelled");
    }
}
