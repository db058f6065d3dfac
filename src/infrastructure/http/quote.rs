// SPDX-License-Identifier: MPL-2.0
//! `reqwest`-backed quote submitter.

use super::payload::QuotePayload;
use super::ApiEndpoints;
use crate::application::port::{BoxFuture, FetchError, QuoteSubmitter};
use crate::domain::quote::QuoteRequest;
use futures_util::FutureExt;

/// Posts quote requests as JSON to the configured quotes endpoint.
#[derive(Debug, Clone)]
pub struct HttpQuoteSubmitter {
    client: reqwest::Client,
    endpoints: ApiEndpoints,
}

impl HttpQuoteSubmitter {
    #[must_use]
    pub fn new(client: reqwest::Client, endpoints: ApiEndpoints) -> Self {
        Self { client, endpoints }
    }

    async fn submit(&self, request: &QuoteRequest) -> Result<(), FetchError> {
        let url = self
            .endpoints
            .quotes
            .as_deref()
            .ok_or(FetchError::NotConfigured)?;

        let response = self
            .client
            .post(url)
            .json(&QuotePayload::from(request))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }
        Ok(())
    }
}

impl QuoteSubmitter for HttpQuoteSubmitter {
    fn submit_quote<'a>(
        &'a self,
        request: &'a QuoteRequest,
    ) -> BoxFuture<'a, Result<(), FetchError>> {
        self.submit(request).boxed()
    }
}
