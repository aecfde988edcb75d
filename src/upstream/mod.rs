//! Upstream Module
//!
//! Abstraction over the third-party voting summary provider.
//!
//! The proxy only depends on [`VotingSummarySource`]; [`KoiosClient`] talks
//! to the real REST service and [`MockVotingSummarySource`] serves canned
//! responses in tests. The mock is public rather than `#[cfg(test)]` because
//! the `tests/` integration suite links against the library as a normal
//! dependency and cannot see test-only items.

mod koios;
pub mod mock;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::FetchError;

pub use koios::KoiosClient;
pub use mock::MockVotingSummarySource;

/// Fetches the raw voting summary payload for one proposal.
#[async_trait]
pub trait VotingSummarySource: Send + Sync {
    /// Issues a single request for `proposal_id`, without retry.
    async fn fetch_voting_summary(&self, proposal_id: &str) -> Result<Value, FetchError>;
}
