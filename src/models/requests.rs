//! Request DTOs for the proxy API
//!
//! Defines the structure of incoming query strings.

/// Query parameter carrying the proposal identifier.
pub const PROPOSAL_ID_PARAM: &str = "_proposal_id";

/// Query for the voting summary endpoint (GET /api/voting-summary)
///
/// # Fields
/// - `_proposal_id`: The governance action to summarize
#[derive(Debug, Clone, Default)]
pub struct VotingSummaryQuery {
    /// Proposal identifier, absent when the parameter is missing
    pub proposal_id: Option<String>,
}

impl VotingSummaryQuery {
    /// Builds the query from decoded key/value pairs.
    ///
    /// When `_proposal_id` is repeated the first occurrence wins and the
    /// rest are ignored. Unknown parameters are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            proposal_id: pairs
                .into_iter()
                .find(|(key, _)| key == PROPOSAL_ID_PARAM)
                .map(|(_, value)| value),
        }
    }

    /// Returns the proposal id if present and non-empty.
    pub fn proposal_id(&self) -> Option<&str> {
        self.proposal_id.as_deref().filter(|id| !id.is_empty())
    }
}
