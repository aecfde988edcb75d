//! Mock voting summary source for testing
//!
//! Serves canned payloads and errors without making real HTTP calls, and
//! records every request for assertions.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Mutex;

use super::VotingSummarySource;
use crate::error::FetchError;

/// Mock upstream for tests.
///
/// Queued errors are consumed one per call before the default payload is
/// served.
///
/// # Example
/// ```ignore
/// let mock = Arc::new(MockVotingSummarySource::new().with_payload(json!([])));
/// let value = mock.fetch_voting_summary("gov_action1abc").await?;
/// assert_eq!(mock.call_count(), 1);
/// ```
#[derive(Clone)]
pub struct MockVotingSummarySource {
    /// Payload returned once queued errors are exhausted
    payload: Arc<Mutex<Value>>,
    /// One-shot errors, returned in order
    errors: Arc<Mutex<VecDeque<FetchError>>>,
    /// Simulated upstream latency
    delay: Option<Duration>,
    /// Number of fetches issued
    calls: Arc<AtomicUsize>,
    /// Proposal ids in request order
    requested: Arc<Mutex<Vec<String>>>,
}

impl Default for MockVotingSummarySource {
    fn default() -> Self {
        Self {
            payload: Arc::new(Mutex::new(json!([]))),
            errors: Arc::new(Mutex::new(VecDeque::new())),
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MockVotingSummarySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the payload served on success.
    pub fn with_payload(self, payload: Value) -> Self {
        Self {
            payload: Arc::new(Mutex::new(payload)),
            ..self
        }
    }

    /// Queues an error for the next unanswered call.
    pub fn with_error(self, error: FetchError) -> Self {
        if let Ok(mut errors) = self.errors.try_lock() {
            errors.push_back(error);
        }
        self
    }

    /// Delays every response, to widen race windows in concurrency tests.
    pub fn with_delay(self, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..self
        }
    }

    /// Replaces the payload served on subsequent successes.
    pub async fn set_payload(&self, payload: Value) {
        *self.payload.lock().await = payload;
    }

    /// Queues an error after construction.
    pub async fn push_error(&self, error: FetchError) {
        self.errors.lock().await.push_back(error);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn requested_ids(&self) -> Vec<String> {
        self.requested.lock().await.clone()
    }
}

#[async_trait]
impl VotingSummarySource for MockVotingSummarySource {
    async fn fetch_voting_summary(&self, proposal_id: &str) -> Result<Value, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().await.push(proposal_id.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = self.errors.lock().await.pop_front() {
            return Err(error);
        }

        Ok(self.payload.lock().await.clone())
    }
}
