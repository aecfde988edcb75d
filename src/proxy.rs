//! Voting Summary Proxy
//!
//! Serves voting summaries from the cache when fresh, otherwise fetches them
//! from the upstream source, stores them and sweeps stale entries once the
//! cache grows past its threshold.
//!
//! The cache lock is never held across the upstream fetch. Two concurrent
//! misses for the same proposal both fetch and the last insert wins.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::cache::CacheStore;
use crate::error::{ProxyError, Result, MISSING_PROPOSAL_ID};
use crate::upstream::VotingSummarySource;

/// Payload returned by [`VotingSummaryProxy::get_voting_summary`].
#[derive(Debug, Clone, PartialEq)]
pub struct VotingSummaryLookup {
    /// Upstream payload, verbatim
    pub data: Value,
    /// True when served from a fresh cache entry
    pub cached: bool,
}

/// Cache-fronted access to the upstream voting summary endpoint.
#[derive(Clone)]
pub struct VotingSummaryProxy {
    cache: Arc<RwLock<CacheStore>>,
    source: Arc<dyn VotingSummarySource>,
}

impl VotingSummaryProxy {
    pub fn new(cache: Arc<RwLock<CacheStore>>, source: Arc<dyn VotingSummarySource>) -> Self {
        Self { cache, source }
    }

    /// Shared handle to the underlying cache.
    pub fn cache(&self) -> &Arc<RwLock<CacheStore>> {
        &self.cache
    }

    /// Returns the voting summary for `proposal_id`.
    ///
    /// # Errors
    /// - [`ProxyError::InvalidRequest`] when the id is absent or empty
    /// - [`ProxyError::Upstream`] when the provider answers with a failure status
    /// - [`ProxyError::Internal`] on network, timeout or decode failures
    ///
    /// Failures never write to the cache.
    pub async fn get_voting_summary(&self, proposal_id: Option<&str>) -> Result<VotingSummaryLookup> {
        let proposal_id = match proposal_id {
            Some(id) if !id.is_empty() => id,
            _ => return Err(ProxyError::InvalidRequest(MISSING_PROPOSAL_ID.to_string())),
        };

        // Write lock: lookups update hit/miss counters
        let cached = self.cache.write().await.lookup(proposal_id);
        if let Some(data) = cached {
            info!(proposal_id, "Cache hit for voting summary");
            return Ok(VotingSummaryLookup { data, cached: true });
        }

        info!(proposal_id, "Fetching voting summary from upstream");
        let data = match self.source.fetch_voting_summary(proposal_id).await {
            Ok(data) => data,
            Err(err) => {
                let err = ProxyError::from_fetch(proposal_id, err);
                match &err {
                    ProxyError::Upstream { status, body, .. } => {
                        warn!(proposal_id, status, body = %body, "Upstream rejected voting summary request")
                    }
                    _ => error!(proposal_id, error = %err, "Voting summary fetch failed"),
                }
                return Err(err);
            }
        };

        let swept = self
            .cache
            .write()
            .await
            .insert(proposal_id.to_string(), data.clone());
        if let Some(removed) = swept {
            debug!(removed, "Swept stale voting summaries");
        }

        Ok(VotingSummaryLookup {
            data,
            cached: false,
        })
    }
}
