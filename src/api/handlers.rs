//! API Handlers
//!
//! HTTP request handlers for each proxy endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::warn;

use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::{FetchError, ProxyError, Result};
use crate::models::{HealthResponse, StatsResponse, VotingSummaryQuery, VotingSummaryResponse};
use crate::proxy::VotingSummaryProxy;
use crate::upstream::{KoiosClient, VotingSummarySource};

/// Application state shared across all handlers.
///
/// Owns the process-wide cache for the lifetime of the server.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache store
    pub cache: Arc<RwLock<CacheStore>>,
    /// Cache-fronted upstream access
    pub proxy: VotingSummaryProxy,
}

impl AppState {
    /// Creates a new AppState around the given cache and upstream source.
    pub fn new(cache: CacheStore, source: Arc<dyn VotingSummarySource>) -> Self {
        let cache = Arc::new(RwLock::new(cache));
        Self {
            proxy: VotingSummaryProxy::new(cache.clone(), source),
            cache,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the cache and the Koios client from the Config.
    pub fn from_config(config: &Config) -> std::result::Result<Self, FetchError> {
        let cache = CacheStore::new(config.cache_ttl, config.sweep_threshold);
        let client = KoiosClient::from_config(config)?;
        Ok(Self::new(cache, Arc::new(client)))
    }
}

/// Handler for GET /api/voting-summary?_proposal_id=<id>
///
/// The query is taken as raw pairs so a repeated `_proposal_id` resolves to
/// its first value. Unparseable query strings become a JSON 400.
pub async fn voting_summary_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<VotingSummaryResponse>> {
    let Query(pairs) = query.map_err(|rejection| {
        warn!(error = %rejection, "Rejected voting summary query string");
        ProxyError::InvalidRequest(rejection.body_text())
    })?;
    let query = VotingSummaryQuery::from_pairs(pairs);
    let proposal_id = query.proposal_id();
    let lookup = state.proxy.get_voting_summary(proposal_id).await?;

    Ok(Json(VotingSummaryResponse::new(
        proposal_id.unwrap_or_default(),
        lookup.data,
        lookup.cached,
    )))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::from(cache.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::MockVotingSummarySource;
    use serde_json::json;

    fn state_with(mock: &Arc<MockVotingSummarySource>) -> AppState {
        AppState::new(CacheStore::new(300, 100), mock.clone())
    }

    fn query(
        id: Option<&str>,
    ) -> std::result::Result<Query<Vec<(String, String)>>, QueryRejection> {
        Ok(Query(
            id.map(|id| vec![("_proposal_id".to_string(), id.to_string())])
                .unwrap_or_default(),
        ))
    }

    #[tokio::test]
    async fn test_voting_summary_handler_miss_then_hit() {
        let mock = Arc::new(MockVotingSummarySource::new().with_payload(json!([{"epoch_no": 3}])));
        let state = state_with(&mock);

        let first = voting_summary_handler(State(state.clone()), query(Some("gov_action1xyz")))
            .await
            .unwrap();
        assert!(!first.cached);
        assert_eq!(first.proposal_id, "gov_action1xyz");

        let second = voting_summary_handler(State(state), query(Some("gov_action1xyz")))
            .await
            .unwrap();
        assert!(second.cached);
        assert_eq!(second.data, json!([{"epoch_no": 3}]));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_voting_summary_handler_missing_id() {
        let mock = Arc::new(MockVotingSummarySource::new());
        let state = state_with(&mock);

        let result = voting_summary_handler(State(state), query(None)).await;
        assert!(matches!(result, Err(ProxyError::InvalidRequest(_))));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let mock = Arc::new(MockVotingSummarySource::new());
        let state = state_with(&mock);

        voting_summary_handler(State(state.clone()), query(Some("a")))
            .await
            .unwrap();
        voting_summary_handler(State(state.clone()), query(Some("a")))
            .await
            .unwrap();

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 1);
        assert_eq!(response.misses, 1);
        assert_eq!(response.total_entries, 1);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[test]
    fn test_state_from_default_config() {
        let state = AppState::from_config(&Config::default()).unwrap();
        assert!(state.cache.try_read().unwrap().is_empty());
    }
}
