// SPDX-License-Identifier: MPL-2.0
//! Plan detail resolution.
//!
//! The detail page asks the API first. When the API is unreachable or answers
//! with an error, the bundled catalog is searched by identity instead. Only
//! when both come up empty does the page show its not-found state.

use crate::application::port::{CancellationToken, FetchError, PlanCatalog, PlanSource};
use crate::domain::plan::{PlanId, PlanRecord};
use std::sync::Arc;

/// Outcome of resolving a plan identity.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanResolution {
    /// The API served the plan.
    Fetched(PlanRecord),
    /// The API failed and the bundled catalog had the plan.
    Fallback {
        plan: PlanRecord,
        reason: FetchError,
    },
    /// Neither the API nor the catalog had the plan.
    NotFound { reason: FetchError },
    /// The request was abandoned; the result must be ignored.
    Cancelled,
}

impl PlanResolution {
    /// The resolved plan, if any.
    #[must_use]
    pub fn plan(&self) -> Option<&PlanRecord> {
        match self {
            PlanResolution::Fetched(plan) | PlanResolution::Fallback { plan, .. } => Some(plan),
            PlanResolution::NotFound { .. } | PlanResolution::Cancelled => None,
        }
    }
}

/// Resolves plan identities against the API with catalog fallback.
///
/// Cheap to clone; both collaborators are shared.
#[derive(Clone)]
pub struct PlanLookup {
    source: Arc<dyn PlanSource>,
    catalog: Arc<dyn PlanCatalog>,
}

impl std::fmt::Debug for PlanLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanLookup").finish_non_exhaustive()
    }
}

impl PlanLookup {
    #[must_use]
    pub fn new(source: Arc<dyn PlanSource>, catalog: Arc<dyn PlanCatalog>) -> Self {
        Self { source, catalog }
    }

    /// Fetches `id` once, falling back to the catalog on any failure.
    ///
    /// No retries. A cancelled token short-circuits to
    /// [`PlanResolution::Cancelled`] without consulting the catalog.
    pub async fn resolve(&self, id: &PlanId, cancel: &CancellationToken) -> PlanResolution {
        let reason = match self.source.fetch_plan(id, cancel).await {
            Ok(raw) if !cancel.is_cancelled() => {
                return PlanResolution::Fetched(raw.normalize());
            }
            Ok(_) | Err(FetchError::Cancelled) => return PlanResolution::Cancelled,
            Err(err) => err,
        };

        if cancel.is_cancelled() {
            return PlanResolution::Cancelled;
        }

        match self.catalog.find(id) {
            Some(plan) => {
                if reason == FetchError::NotConfigured {
                    tracing::debug!(plan_id = %id, "no API configured, using bundled catalog");
                } else {
                    tracing::warn!(
                        plan_id = %id,
                        error = %reason,
                        "plan fetch failed, using bundled catalog"
                    );
                }
                PlanResolution::Fallback {
                    plan: plan.clone(),
                    reason,
                }
            }
            None => {
                tracing::warn!(
                    plan_id = %id,
                    error = %reason,
                    "plan not found in API or bundled catalog"
                );
                PlanResolution::NotFound { reason }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{BoxFuture, CatalogSection};
    use crate::domain::plan::RawPlan;

    struct FixedSource(Result<RawPlan, FetchError>);

    impl PlanSource for FixedSource {
        fn fetch_plan<'a>(
            &'a self,
            _id: &'a PlanId,
            _cancel: &'a CancellationToken,
        ) -> BoxFuture<'a, Result<RawPlan, FetchError>> {
            let result = self.0.clone();
            Box::pin(async move { result })
        }
    }

    struct OneEntryCatalog(Vec<PlanRecord>);

    impl PlanCatalog for OneEntryCatalog {
        fn section(&self, section: CatalogSection) -> &[PlanRecord] {
            match section {
                CatalogSection::HousePlans => &self.0,
                CatalogSection::BuiltHomes => &[],
            }
        }
    }

    fn catalog_with(id: &str, title: &str) -> Arc<dyn PlanCatalog> {
        let mut record = RawPlan::new(id, title, 900_000.0, 3, 2.0, 150).normalize();
        record.styles = vec!["Tuscan".into()];
        Arc::new(OneEntryCatalog(vec![record]))
    }

    fn lookup(result: Result<RawPlan, FetchError>, catalog: Arc<dyn PlanCatalog>) -> PlanLookup {
        PlanLookup::new(Arc::new(FixedSource(result)), catalog)
    }

    #[tokio::test]
    async fn fetched_payload_is_normalized() {
        let raw = RawPlan::new("5", "Remote Plan", 1_000.4, 2, 1.0, 90);
        let lookup = lookup(Ok(raw), catalog_with("5", "Static Plan"));
        let resolution = lookup.resolve(&PlanId::from("5"), &CancellationToken::new()).await;
        assert_eq!(resolution.plan().map(|p| p.title.as_str()), Some("Remote Plan"));
        assert!(matches!(resolution, PlanResolution::Fetched(_)));
    }

    #[tokio::test]
    async fn status_error_falls_back_to_catalog() {
        let lookup = lookup(Err(FetchError::Status(500)), catalog_with("5", "Static Plan"));
        let resolution = lookup.resolve(&PlanId::from("5"), &CancellationToken::new()).await;
        match resolution {
            PlanResolution::Fallback { plan, reason } => {
                assert_eq!(plan.title, "Static Plan");
                assert_eq!(reason, FetchError::Status(500));
            }
            other => panic!("expected fallback, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let lookup = lookup(
            Err(FetchError::Network("refused".into())),
            catalog_with("5", "Static Plan"),
        );
        let resolution = lookup.resolve(&PlanId::from("99"), &CancellationToken::new()).await;
        assert!(matches!(resolution, PlanResolution::NotFound { .. }));
        assert!(resolution.plan().is_none());
    }

    #[tokio::test]
    async fn cancelled_token_discards_result() {
        let raw = RawPlan::new("5", "Remote Plan", 1.0, 1, 1.0, 1);
        let lookup = lookup(Ok(raw), catalog_with("5", "Static Plan"));
        let token = CancellationToken::new();
        token.cancel();
        let resolution = lookup.resolve(&PlanId::from("5"), &token).await;
        assert_eq!(resolution, PlanResolution::Cancelled);
    }
}
