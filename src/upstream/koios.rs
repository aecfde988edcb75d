//! Koios REST client for `proposal_voting_summary`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CACHE_CONTROL};
use reqwest::Client as HttpClient;
use serde_json::Value;
use tracing::{debug, error};

use super::VotingSummarySource;
use crate::config::Config;
use crate::error::FetchError;

/// Voting summary provider client
pub struct KoiosClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
    max_age: u64,
}

impl KoiosClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `base_url` - Provider root, e.g. `https://api.koios.rest/api/v1`
    /// * `api_key` - Sent verbatim as `authorization`; may be empty
    /// * `timeout` - Whole-request timeout
    /// * `max_age` - `cache-control` max-age in seconds for transport caches
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
        max_age: u64,
    ) -> Result<Self, FetchError> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            max_age,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Self::new(
            config.upstream_base_url.clone(),
            config.api_key.clone(),
            Duration::from_secs(config.upstream_timeout),
            config.upstream_max_age,
        )
    }

    fn summary_url(&self) -> String {
        format!("{}/proposal_voting_summary", self.base_url)
    }
}

#[async_trait]
impl VotingSummarySource for KoiosClient {
    async fn fetch_voting_summary(&self, proposal_id: &str) -> Result<Value, FetchError> {
        let url = self.summary_url();
        debug!(proposal_id, %url, "Requesting voting summary from upstream");

        let response = self
            .http
            .get(&url)
            .query(&[("_proposal_id", proposal_id)])
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, self.api_key.as_str())
            .header(CACHE_CONTROL, format!("max-age={}", self.max_age))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let reason = status.canonical_reason().unwrap_or_default().to_string();
            error!(
                status = status.as_u16(),
                %reason,
                body = %body,
                proposal_id,
                "Upstream returned an error status"
            );
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason,
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))
    }
}
