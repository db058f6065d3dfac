// SPDX-License-Identifier: MPL-2.0
//! Quote submission port definition.

use super::plan_source::{BoxFuture, FetchError};
use crate::domain::quote::QuoteRequest;

/// Sends quote requests to the storefront API.
///
/// Failures reuse [`FetchError`]; a non-2xx answer is
/// [`FetchError::Status`].
pub trait QuoteSubmitter: Send + Sync {
    fn submit_quote<'a>(
        &'a self,
        request: &'a QuoteRequest,
    ) -> BoxFuture<'a, Result<(), FetchError>>;
}
