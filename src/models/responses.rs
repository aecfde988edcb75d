//! Response DTOs for the proxy API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cache::CacheStats;
use crate::models::VotingSummary;

/// Response body for GET /api/voting-summary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotingSummaryResponse {
    /// Upstream payload, passed through verbatim
    pub data: Value,
    /// The requested proposal
    pub proposal_id: String,
    /// Whether the payload came from the proxy cache
    pub cached: bool,
    /// Response time in ISO 8601 format
    pub timestamp: String,
}

impl VotingSummaryResponse {
    /// Creates a new VotingSummaryResponse stamped with the current time
    pub fn new(proposal_id: impl Into<String>, data: Value, cached: bool) -> Self {
        Self {
            data,
            proposal_id: proposal_id.into(),
            cached,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Decodes `data` into typed voting summary records.
    pub fn records(&self) -> serde_json::Result<Vec<VotingSummary>> {
        serde_json::from_value(self.data.clone())
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub sweeps: u64,
    pub swept_entries: u64,
    /// Current number of entries in cache, fresh or stale
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            sweeps: stats.sweeps,
            swept_entries: stats.swept_entries,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
///
/// `details` and `proposalId` are omitted for request validation errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Short summary of what went wrong
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposal_id: Option<String>,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            proposal_id: None,
        }
    }

    /// Attaches the failure description and the proposal it concerns
    pub fn with_details(
        mut self,
        details: impl Into<String>,
        proposal_id: impl Into<String>,
    ) -> Self {
        self.details = Some(details.into());
        self.proposal_id = Some(proposal_id.into());
        self
    }
}
