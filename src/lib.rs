//! Voting Summary Proxy - caching front for governance proposal vote tallies
//!
//! Serves per-proposal voting summaries from an in-memory cache with TTL
//! expiry, falling back to the upstream provider on misses.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod proxy;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use proxy::{VotingSummaryLookup, VotingSummaryProxy};
