//! # Collection cache
//!
//! One explicit store per record type, mapping a cache key (a logical
//! remote collection, see [`keys`]) to the last fetched rows and when they
//! arrived. Shared across every consumer of that key via a context signal.
//!
//! Invalidation is the only cross-layer write path: after a successful
//! mutation the coordinator calls [`CollectionCache::invalidate`], which
//! drops the entry and bumps its generation counter. Loaders subscribe to
//! the generation, so the next read goes back to the server — there is no
//! client-side merge of mutation results.

use std::collections::HashMap;

/// How long a fetched collection stays fresh: remounting within this window
/// serves the cached rows without a request.
pub const FRESH_WINDOW_SECS: i64 = 30;

/// Interval of the background refresh loop.
pub const REFRESH_INTERVAL_SECS: u64 = 60;

/// Cache keys for the remote collections the dashboard reads.
pub mod keys {
    pub const USERS_ALL: &str = "users:all";
    pub const USERS_MANAGER: &str = "users:manager";
    pub const USERS_TECH: &str = "users:tech";
    pub const LOCATES: &str = "locates";
    pub const WORK_ORDERS_TODAY: &str = "work-orders-today";
}

/// A fetched collection plus its arrival time.
#[derive(Clone, Debug, PartialEq)]
pub struct CachedCollection<T> {
    pub items: Vec<T>,
    pub fetched_at: i64,
}

impl<T> CachedCollection<T> {
    pub fn is_fresh(&self, now: i64) -> bool {
        now.saturating_sub(self.fetched_at) < FRESH_WINDOW_SECS
    }
}

/// Cache-key → collection store for one record type.
#[derive(Clone, Debug)]
pub struct CollectionCache<T> {
    entries: HashMap<String, CachedCollection<T>>,
    generations: HashMap<String, u64>,
}

impl<T> Default for CollectionCache<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            generations: HashMap::new(),
        }
    }
}

impl<T: Clone> CollectionCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&CachedCollection<T>> {
        self.entries.get(key)
    }

    /// The cached rows for `key`, if they are still inside the freshness
    /// window at `now`.
    pub fn fresh_items(&self, key: &str, now: i64) -> Option<Vec<T>> {
        self.entries
            .get(key)
            .filter(|entry| entry.is_fresh(now))
            .map(|entry| entry.items.clone())
    }

    /// Record a successful fetch.
    pub fn store(&mut self, key: &str, items: Vec<T>, now: i64) {
        self.entries
            .insert(key.to_string(), CachedCollection { items, fetched_at: now });
    }

    /// Drop the entry for `key` and bump its generation, forcing the next
    /// read of that key back to the server.
    pub fn invalidate(&mut self, key: &str) {
        self.entries.remove(key);
        *self.generations.entry(key.to_string()).or_insert(0) += 1;
    }

    /// Monotonic counter bumped by [`invalidate`](Self::invalidate).
    /// Loaders read it to re-run after a mutation.
    pub fn generation(&self, key: &str) -> u64 {
        self.generations.get(key).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_within_window_stale_after() {
        let mut cache = CollectionCache::new();
        cache.store("users:all", vec![1, 2, 3], 1_000);

        assert_eq!(cache.fresh_items("users:all", 1_000), Some(vec![1, 2, 3]));
        assert_eq!(
            cache.fresh_items("users:all", 1_000 + FRESH_WINDOW_SECS - 1),
            Some(vec![1, 2, 3])
        );
        assert_eq!(cache.fresh_items("users:all", 1_000 + FRESH_WINDOW_SECS), None);
    }

    #[test]
    fn unknown_key_is_a_miss() {
        let cache = CollectionCache::<i32>::new();
        assert_eq!(cache.fresh_items("users:all", 0), None);
        assert_eq!(cache.generation("users:all"), 0);
    }

    #[test]
    fn invalidate_drops_entry_and_bumps_generation() {
        let mut cache = CollectionCache::new();
        cache.store("users:all", vec![1], 1_000);

        cache.invalidate("users:all");
        assert!(cache.get("users:all").is_none());
        assert_eq!(cache.generation("users:all"), 1);

        cache.invalidate("users:all");
        assert_eq!(cache.generation("users:all"), 2);
    }

    #[test]
    fn keys_are_independent() {
        let mut cache = CollectionCache::new();
        cache.store("users:all", vec![1], 1_000);
        cache.store("users:tech", vec![2], 1_000);

        cache.invalidate("users:all");
        assert!(cache.get("users:all").is_none());
        assert_eq!(cache.fresh_items("users:tech", 1_000), Some(vec![2]));
        assert_eq!(cache.generation("users:tech"), 0);
    }

    #[test]
    fn store_replaces_previous_entry() {
        let mut cache = CollectionCache::new();
        cache.store("locates", vec![1], 1_000);
        cache.store("locates", vec![9, 9], 2_000);
        let entry = cache.get("locates").unwrap();
        assert_eq!(entry.items, vec![9, 9]);
        assert_eq!(entry.fetched_at, 2_000);
    }
}
