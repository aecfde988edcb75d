//! Cache Module
//!
//! Provides in-memory caching of upstream payloads with TTL expiration and
//! a size-triggered sweep of stale entries.

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use stats::CacheStats;
pub use store::CacheStore;
