//! Cache Entry Module
//!
//! Defines a single cached voting summary with its storage time and TTL.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

// == Cache Entry ==
/// A cached upstream payload. Never mutated after insertion.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Upstream payload, stored verbatim
    pub value: Value,
    /// Insertion timestamp (Unix milliseconds)
    pub stored_at: u64,
    /// Freshness window in milliseconds
    pub ttl_ms: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stored at `stored_at` with the given TTL.
    pub fn new(value: Value, stored_at: u64, ttl_ms: u64) -> Self {
        Self {
            value,
            stored_at,
            ttl_ms,
        }
    }

    // == Age ==
    /// Milliseconds elapsed between insertion and `now`.
    ///
    /// Clock steps backwards yield an age of zero.
    pub fn age_at(&self, now: u64) -> u64 {
        now.saturating_sub(self.stored_at)
    }

    // == Is Fresh ==
    /// Checks whether the entry may still satisfy a lookup at `now`.
    ///
    /// Boundary condition: an entry whose age equals its TTL is stale.
    pub fn is_fresh_at(&self, now: u64) -> bool {
        self.age_at(now) < self.ttl_ms
    }

    /// Checks freshness against the current wall clock.
    pub fn is_fresh(&self) -> bool {
        self.is_fresh_at(current_timestamp_ms())
    }

    // == Time To Live ==
    /// Returns remaining freshness in milliseconds at `now`, zero once stale.
    pub fn ttl_remaining_ms(&self, now: u64) -> u64 {
        self.ttl_ms.saturating_sub(self.age_at(now))
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
