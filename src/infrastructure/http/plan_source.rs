// SPDX-License-Identifier: MPL-2.0
//! `reqwest`-backed plan source.

use super::payload::PlanPayload;
use super::ApiEndpoints;
use crate::application::port::{BoxFuture, CancellationToken, FetchError, PlanSource};
use crate::domain::plan::{PlanId, RawPlan};
use futures_util::FutureExt;

/// Fetches plan payloads from the configured detail endpoint.
#[derive(Debug, Clone)]
pub struct HttpPlanSource {
    client: reqwest::Client,
    endpoints: ApiEndpoints,
}

impl HttpPlanSource {
    #[must_use]
    pub fn new(client: reqwest::Client, endpoints: ApiEndpoints) -> Self {
        Self { client, endpoints }
    }

    async fn fetch(&self, id: &PlanId, cancel: &CancellationToken) -> Result<RawPlan, FetchError> {
        let url = self.endpoints.plan_detail_url(id)?;
        if cancel.is_cancelled() {
            return Err(FetchError::Cancelled);
        }

        tracing::debug!(%url, "fetching plan");
        // Dropping the request future closes the connection.
        tokio::select! {
            result = self.request(&url) => result,
            () = cancel.cancelled() => {
                tracing::debug!(%url, "plan fetch cancelled");
                Err(FetchError::Cancelled)
            }
        }
    }

    async fn request(&self, url: &str) -> Result<RawPlan, FetchError> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let payload: PlanPayload = response.json().await?;
        Ok(payload.into())
    }
}

impl PlanSource for HttpPlanSource {
    fn fetch_plan<'a>(
        &'a self,
        id: &'a PlanId,
        cancel: &'a CancellationToken,
    ) -> BoxFuture<'a, Result<RawPlan, FetchError>> {
        self.fetch(id, cancel).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::RequestTimeout;
    use crate::infrastructure::http::build_client;
    use std::net::TcpListener;
    use std::time::{Duration, Instant};

    /// Source pointed at a listener that accepts connections but never answers.
    fn silent_server_source() -> (TcpListener, HttpPlanSource) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
        let base = format!("http://{}", listener.local_addr().expect("local addr"));
        let endpoints = ApiEndpoints::new(Some(&base), Some("/plans/:id/"), None, None);
        let client = build_client(RequestTimeout::from_secs(30)).expect("client");
        (listener, HttpPlanSource::new(client, endpoints))
    }

    #[tokio::test]
    async fn cancel_abandons_request_in_flight() {
        let (_listener, source) = silent_server_source();
        let token = CancellationToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            canceller.cancel();
        });

        let started = Instant::now();
        let result = source.fetch_plan(&PlanId::from("7"), &token).await;

        assert_eq!(result, Err(FetchError::Cancelled));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn cancelled_token_never_sends() {
        let (_listener, source) = silent_server_source();
        let token = CancellationToken::new();
        token.cancel();
        let result = source.fetch_plan(&PlanId::from("7"), &token).await;
        assert_eq!(result, Err(FetchError::Cancelled));
    }

    #[tokio::test]
    async fn missing_endpoint_is_not_configured() {
        let source = HttpPlanSource::new(reqwest::Client::new(), ApiEndpoints::default());
        let result = source
            .fetch_plan(&PlanId::from("7"), &CancellationToken::new())
            .await;
        assert_eq!(result, Err(FetchError::NotConfigured));
    }
}
