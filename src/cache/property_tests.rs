//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check freshness, replacement and sweep behavior over
//! generated keys, payloads and timestamps.

use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::HashSet;

use crate::cache::CacheStore;

// == Test Configuration ==
const TEST_TTL_SECS: u64 = 300;
const TEST_TTL_MS: u64 = TEST_TTL_SECS * 1000;
const TEST_SWEEP_THRESHOLD: usize = 100;

// == Strategies ==
/// Generates proposal-like identifiers
fn proposal_id_strategy() -> impl Strategy<Value = String> {
    "gov_action1[a-z0-9]{1,48}".prop_map(|s| s)
}

/// Generates small voting-summary-shaped payloads
fn payload_strategy() -> impl Strategy<Value = Value> {
    prop::collection::vec((0u64..1_000, 0u64..100), 0..4).prop_map(|rows| {
        Value::Array(
            rows.into_iter()
                .map(|(epoch, pct)| json!({"epoch_no": epoch, "drep_yes_pct": pct}))
                .collect(),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // An entry inserted at t0 is returned by every lookup before t0 + ttl
    // and by none at or after it.
    #[test]
    fn prop_freshness_window(
        key in proposal_id_strategy(),
        value in payload_strategy(),
        t0 in 0u64..1_000_000_000,
        offset in 0u64..(2 * TEST_TTL_MS)
    ) {
        let mut store = CacheStore::new(TEST_TTL_SECS, TEST_SWEEP_THRESHOLD);
        store.insert_at(key.clone(), value.clone(), t0);

        let result = store.lookup_at(&key, t0 + offset);
        if offset < TEST_TTL_MS {
            prop_assert_eq!(result, Some(value), "Fresh entry should be a hit");
        } else {
            prop_assert!(result.is_none(), "Stale entry must not be returned");
        }
    }

    // The most recent insert for a key is what the next fresh lookup returns.
    #[test]
    fn prop_replacement(
        key in proposal_id_strategy(),
        first in payload_strategy(),
        second in payload_strategy(),
        t_first in 0u64..1_000_000,
        gap in 0u64..(3 * TEST_TTL_MS)
    ) {
        let mut store = CacheStore::new(TEST_TTL_SECS, TEST_SWEEP_THRESHOLD);

        store.insert_at(key.clone(), first, t_first);
        store.insert_at(key.clone(), second.clone(), t_first + gap);

        prop_assert_eq!(store.len(), 1, "Should have exactly one entry after overwrite");
        prop_assert_eq!(store.lookup_at(&key, t_first + gap), Some(second));
    }

    // After an insert that triggers a sweep, only fresh entries remain and
    // every entry that was fresh before the sweep is still present.
    #[test]
    fn prop_sweep_removes_only_stale(
        inserts in prop::collection::vec(
            (proposal_id_strategy(), 0u64..(3 * TEST_TTL_MS)),
            1..60
        ),
        threshold in 1usize..20
    ) {
        let mut store = CacheStore::new(TEST_TTL_SECS, threshold);
        let mut now = 0u64;

        for (key, step) in inserts {
            now += step;
            let fresh_before = fresh_keys(&store, now);

            let swept = store.insert_at(key.clone(), json!([]), now);

            if swept.is_some() {
                for k in &fresh_before {
                    prop_assert!(store.peek(k).is_some(), "Fresh entry {} was swept", k);
                }
                prop_assert_eq!(
                    fresh_keys(&store, now).len(),
                    store.len(),
                    "Stale entry survived a sweep"
                );
            } else {
                prop_assert!(store.len() <= threshold);
            }
        }
    }
}

fn fresh_keys(store: &CacheStore, now: u64) -> HashSet<String> {
    store
        .keys()
        .filter(|k| store.peek(k).is_some_and(|e| e.is_fresh_at(now)))
        .cloned()
        .collect()
}
