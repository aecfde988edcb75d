//! Cache Store Module
//!
//! Maps proposal identifiers to cached voting summaries with TTL expiry and
//! a size-triggered sweep of stale entries.

use std::collections::HashMap;

use serde_json::Value;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// In-memory voting summary cache, one entry per proposal.
#[derive(Debug)]
pub struct CacheStore {
    /// Proposal id to entry
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// TTL applied to every insert, in milliseconds
    ttl_ms: u64,
    /// Inserts that leave more entries than this run a sweep
    sweep_threshold: usize,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore.
    ///
    /// # Arguments
    /// * `ttl_secs` - Freshness window of each entry in seconds
    /// * `sweep_threshold` - Entry count above which inserts trigger a sweep
    pub fn new(ttl_secs: u64, sweep_threshold: usize) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl_ms: ttl_secs.saturating_mul(1000),
            sweep_threshold,
        }
    }

    // == Lookup ==
    /// Returns the cached payload for `key` if a fresh entry exists.
    ///
    /// Stale entries are left in place and count as misses.
    pub fn lookup(&mut self, key: &str) -> Option<Value> {
        self.lookup_at(key, current_timestamp_ms())
    }

    /// [`lookup`](Self::lookup) evaluated at an explicit timestamp.
    pub fn lookup_at(&mut self, key: &str, now: u64) -> Option<Value> {
        match self.entries.get(key) {
            Some(entry) if entry.is_fresh_at(now) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            _ => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Insert ==
    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// Returns the number of entries removed when the insert triggered a sweep.
    pub fn insert(&mut self, key: String, value: Value) -> Option<usize> {
        self.insert_at(key, value, current_timestamp_ms())
    }

    /// [`insert`](Self::insert) evaluated at an explicit timestamp.
    pub fn insert_at(&mut self, key: String, value: Value, now: u64) -> Option<usize> {
        self.entries
            .insert(key, CacheEntry::new(value, now, self.ttl_ms));

        let swept = if self.entries.len() > self.sweep_threshold {
            Some(self.sweep_at(now))
        } else {
            None
        };

        self.stats.set_total_entries(self.entries.len());
        swept
    }

    // == Sweep ==
    /// Removes every entry that is stale at `now`.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_at(&mut self, now: u64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.is_fresh_at(now));
        let removed = before - self.entries.len();

        self.stats.record_sweep(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Peek ==
    /// Returns the entry for `key` regardless of freshness, without touching stats.
    pub fn peek(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    /// Iterates over cached proposal ids, fresh or stale.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn ttl_ms(&self) -> u64 {
        self.ttl_ms
    }

    pub fn sweep_threshold(&self) -> usize {
        self.sweep_threshold
    }

    // == Length ==
    /// Returns the current number of entries, fresh or stale.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
