//! Typed voting summary record
//!
//! The proxy caches upstream payloads as opaque JSON. This type is for callers
//! that want the per-category tallies decoded. Vote powers are lovelace
//! amounts the provider encodes as decimal strings.

use serde::{Deserialize, Serialize};

/// One row of `proposal_voting_summary`.
///
/// Missing fields decode to their defaults so partially populated rows
/// (e.g. proposals committees don't vote on) still parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VotingSummary {
    pub proposal_type: String,
    pub epoch_no: u64,

    // Delegate representatives
    pub drep_yes_votes_cast: u64,
    pub drep_active_yes_vote_power: String,
    pub drep_yes_vote_power: String,
    pub drep_yes_pct: f64,
    pub drep_no_votes_cast: u64,
    pub drep_active_no_vote_power: String,
    pub drep_no_vote_power: String,
    pub drep_no_pct: f64,
    pub drep_abstain_votes_cast: u64,
    pub drep_active_abstain_vote_power: String,
    pub drep_always_no_confidence_vote_power: String,
    pub drep_always_abstain_vote_power: String,

    // Stake pools
    pub pool_yes_votes_cast: u64,
    pub pool_active_yes_vote_power: String,
    pub pool_yes_vote_power: String,
    pub pool_yes_pct: f64,
    pub pool_no_votes_cast: u64,
    pub pool_active_no_vote_power: String,
    pub pool_no_vote_power: String,
    pub pool_no_pct: f64,
    pub pool_abstain_votes_cast: u64,
    pub pool_active_abstain_vote_power: String,
    pub pool_passive_always_abstain_votes_assigned: u64,
    pub pool_passive_always_abstain_vote_power: String,
    pub pool_passive_always_no_confidence_votes_assigned: u64,
    pub pool_passive_always_no_confidence_vote_power: String,

    // Constitutional committee
    pub committee_yes_votes_cast: u64,
    pub committee_yes_pct: f64,
    pub committee_no_votes_cast: u64,
    pub committee_no_pct: f64,
    pub committee_abstain_votes_cast: u64,
}

impl VotingSummary {
    /// Total ballots cast by delegate representatives.
    pub fn drep_votes_cast(&self) -> u64 {
        self.drep_yes_votes_cast
            .saturating_add(self.drep_no_votes_cast)
            .saturating_add(self.drep_abstain_votes_cast)
    }

    /// Total ballots cast by stake pools.
    pub fn pool_votes_cast(&self) -> u64 {
        self.pool_yes_votes_cast
            .saturating_add(self.pool_no_votes_cast)
            .saturating_add(self.pool_abstain_votes_cast)
    }

    /// Total ballots cast by committee members.
    pub fn committee_votes_cast(&self) -> u64 {
        self.committee_yes_votes_cast
            .saturating_add(self.committee_no_votes_cast)
            .saturating_add(self.committee_abstain_votes_cast)
    }
}
