//! Request and Response models for the proxy API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;
pub mod voting_summary;

// Re-export commonly used types
pub use requests::VotingSummaryQuery;
pub use responses::{ErrorResponse, HealthResponse, StatsResponse, VotingSummaryResponse};
pub use voting_summary::VotingSummary;
