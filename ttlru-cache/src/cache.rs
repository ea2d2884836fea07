//! Thread-safe LRU cache with lazy TTL expiry.
//!
//! Recency lives in a [`LinkedList`] (front = most recently used, back = next
//! eviction candidate) and key lookup in a [`ConcurrentMap`] from key to list
//! node. Every operation that touches both runs inside one critical section on
//! the list mutex, so the two structures always describe the same set of keys.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::{debug, instrument, trace, warn};

use ttlru_collections::{ConcurrentMap, LinkedList, NodeHandle};
use ttlru_core::error::{CacheError, Result};
use ttlru_core::traits::{KeyValueCache, Source};
use ttlru_core::types::{CacheConfig, CacheStats};

use crate::source::FnSource;

/// Cached value with its expiry.
struct Entry<K, V> {
    key: K,
    value: V,
    /// `None` when the TTL overflows `Instant`, i.e. never expires
    expire_at: Option<Instant>,
}

impl<K, V> Entry<K, V> {
    fn is_expired(&self, now: Instant) -> bool {
        matches!(self.expire_at, Some(expire_at) if now > expire_at)
    }
}

fn expiry(now: Instant, ttl: Duration) -> Option<Instant> {
    now.checked_add(ttl)
}

#[derive(Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
    expired: AtomicU64,
    insertions: AtomicU64,
    updates: AtomicU64,
    evictions: AtomicU64,
    removals: AtomicU64,
    fetches: AtomicU64,
    fetch_errors: AtomicU64,
}

impl Counters {
    fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn add(counter: &AtomicU64, n: u64) {
        counter.fetch_add(n, Ordering::Relaxed);
    }

    fn read(counter: &AtomicU64) -> u64 {
        counter.load(Ordering::Relaxed)
    }
}

/// In-memory LRU cache with TTL expiry.
///
/// Expiry is lazy: a read of an expired entry reports a miss but leaves the
/// entry resident, still holding its capacity slot, until LRU pressure,
/// [`remove`](Self::remove), [`flush`](Self::flush), or
/// [`purge_expired`](Self::purge_expired) drops it.
///
/// Thread-safe: every method takes `&self`, so the cache is usually shared
/// behind an [`Arc`].
pub struct LruCache<K, V> {
    config: CacheConfig,
    list: Mutex<LinkedList<Entry<K, V>>>,
    /// Only written while `list` is locked
    index: ConcurrentMap<K, NodeHandle>,
    source: Option<Arc<dyn Source<K, V>>>,
    counters: Counters,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Creates a cache with default configuration.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates a cache with custom configuration.
    ///
    /// The configuration is taken as-is; call [`CacheConfig::validate`] first
    /// for untrusted input.
    pub fn with_config(config: CacheConfig) -> Self {
        let preallocate = config.capacity.min(1024);
        Self {
            list: Mutex::new(LinkedList::with_capacity(preallocate)),
            index: ConcurrentMap::with_capacity(preallocate),
            source: None,
            counters: Counters::default(),
            config,
        }
    }

    /// Attaches the source consulted by [`get_or_fetch`](Self::get_or_fetch) on a miss.
    pub fn with_source<S>(mut self, source: S) -> Self
    where
        S: Source<K, V> + 'static,
    {
        self.source = Some(Arc::new(source));
        self
    }

    /// Attaches an async closure as the fetch-through source.
    pub fn with_source_fn<F, Fut>(self, f: F) -> Self
    where
        F: Fn(K) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<V>> + Send + 'static,
    {
        self.with_source(FnSource::new(f))
    }

    /// Returns the configuration the cache was built with.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Returns the maximum number of entries (`0` = unbounded).
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Returns the TTL applied by [`set`](Self::set).
    pub fn ttl(&self) -> Duration {
        self.config.ttl
    }

    /// Returns true if a fetch-through source is attached.
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Stores `value` under `key` and marks it most recently used.
    ///
    /// An existing entry is updated in place; its expiry is reset only when
    /// [`CacheConfig::refresh_ttl_on_update`] is set. A new entry that pushes
    /// the cache over capacity evicts exactly one entry, the least recently used.
    pub fn set(&self, key: K, value: V) {
        self.insert(key, value, self.config.ttl, self.config.refresh_ttl_on_update);
    }

    /// Stores `value` under `key` with a TTL of its own.
    ///
    /// Unlike [`set`](Self::set), the expiry is always reset.
    pub fn set_with_ttl(&self, key: K, value: V, ttl: Duration) {
        self.insert(key, value, ttl, true);
    }

    fn insert(&self, key: K, value: V, ttl: Duration, reset_expiry: bool) {
        let now = Instant::now();
        let mut list = self.list.lock();

        if let Some(node) = self.index.load(&key) {
            if let Some(entry) = list.get_mut(node) {
                entry.value = value;
                if reset_expiry {
                    entry.expire_at = expiry(now, ttl);
                }
                list.move_to_front(node);
                Counters::bump(&self.counters.updates);
                return;
            }
        }

        let node = list.push_front(Entry {
            key: key.clone(),
            value,
            expire_at: expiry(now, ttl),
        });
        self.index.store(key, node);
        Counters::bump(&self.counters.insertions);

        if self.config.is_bounded() && list.len() > self.config.capacity {
            self.evict_oldest(&mut list);
        }
    }

    /// Drops the back-most entry. Caller holds the list lock.
    fn evict_oldest(&self, list: &mut LinkedList<Entry<K, V>>) {
        let Some(oldest) = list.back() else {
            return;
        };
        if let Some(entry) = list.remove(oldest) {
            self.index.delete(&entry.key);
            Counters::bump(&self.counters.evictions);
            trace!(len = list.len(), capacity = self.config.capacity, "Evicted least recently used entry");
        }
    }

    /// Returns the value for `key` and marks it most recently used.
    ///
    /// Returns `None` if the key is absent or expired. An expired entry is
    /// left in place.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let now = Instant::now();
        let mut list = self.list.lock();

        let Some((node, entry)) = self
            .index
            .load(key)
            .and_then(|node| list.get(node).map(|entry| (node, entry)))
        else {
            Counters::bump(&self.counters.misses);
            return None;
        };

        if entry.is_expired(now) {
            Counters::bump(&self.counters.expired);
            return None;
        }

        let value = entry.value.clone();
        list.move_to_front(node);
        Counters::bump(&self.counters.hits);
        Some(value)
    }

    /// Returns the live value for `key` without touching recency or statistics.
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let now = Instant::now();
        let list = self.list.lock();
        let entry = list.get(self.index.load(key)?)?;
        (!entry.is_expired(now)).then(|| entry.value.clone())
    }

    /// Returns the value for `key`, loading it from the source on a miss.
    ///
    /// A loaded value is stored with [`set`](Self::set) before it is returned.
    ///
    /// # Errors
    ///
    /// - [`CacheError::Miss`] if no source is attached, or the source reports
    ///   the key as missing
    /// - [`CacheError::SourceFailed`] if the source fails for any other reason
    ///
    /// Concurrent misses on the same key are not coalesced: each caller runs
    /// its own fetch. The cache lock is not held while the source runs, and
    /// dropping the returned future cancels the fetch.
    #[instrument(skip_all)]
    pub async fn get_or_fetch(&self, key: &K) -> Result<V> {
        if let Some(value) = self.get(key) {
            return Ok(value);
        }

        let Some(source) = self.source.as_ref() else {
            return Err(CacheError::Miss);
        };

        Counters::bump(&self.counters.fetches);
        debug!("Cache miss, fetching from source");

        match source.fetch(key).await {
            Ok(value) => {
                self.set(key.clone(), value.clone());
                Ok(value)
            }
            Err(err) => {
                Counters::bump(&self.counters.fetch_errors);
                if err.is_miss() {
                    debug!("Source reported miss");
                    return Err(CacheError::Miss);
                }
                warn!(error = %err, "Source fetch failed");
                if err.is_source_error() {
                    Err(err)
                } else {
                    Err(CacheError::from_source(err))
                }
            }
        }
    }

    /// Removes `key`, returning its value if it was resident (expired or not).
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut list = self.list.lock();
        let node = self.index.delete(key)?;
        let entry = list.remove(node)?;
        Counters::bump(&self.counters.removals);
        Some(entry.value)
    }

    /// Returns true if `key` is resident, expired or not.
    ///
    /// Lock-free; a concurrent writer may change the answer immediately.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Returns the number of resident entries, expired ones included.
    pub fn len(&self) -> usize {
        self.list.lock().len()
    }

    /// Returns true if nothing is resident.
    pub fn is_empty(&self) -> bool {
        self.list.lock().is_empty()
    }

    /// Returns resident keys, most recently used first.
    pub fn keys(&self) -> Vec<K> {
        self.list.lock().iter().map(|entry| entry.key.clone()).collect()
    }

    /// Drops every entry.
    pub fn flush(&self) {
        let mut list = self.list.lock();
        let dropped = list.len();
        list.init();
        self.index.clear();
        debug!(dropped, "Flushed cache");
    }

    /// Removes every expired entry and returns how many were dropped.
    ///
    /// O(n) in the number of resident entries.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut list = self.list.lock();

        let mut purged = 0;
        let mut cursor = list.back();
        while let Some(node) = cursor {
            cursor = list.prev(node);
            if !list.get(node).is_some_and(|entry| entry.is_expired(now)) {
                continue;
            }
            if let Some(entry) = list.remove(node) {
                self.index.delete(&entry.key);
                purged += 1;
            }
        }

        if purged > 0 {
            Counters::add(&self.counters.removals, purged as u64);
            debug!(purged, remaining = list.len(), "Purged expired entries");
        }
        purged
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        let c = &self.counters;
        CacheStats {
            hits: Counters::read(&c.hits),
            misses: Counters::read(&c.misses),
            expired: Counters::read(&c.expired),
            insertions: Counters::read(&c.insertions),
            updates: Counters::read(&c.updates),
            evictions: Counters::read(&c.evictions),
            removals: Counters::read(&c.removals),
            fetches: Counters::read(&c.fetches),
            fetch_errors: Counters::read(&c.fetch_errors),
            len: self.len(),
            capacity: self.config.capacity,
        }
    }
}

impl<K, V> Default for LruCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> KeyValueCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn set(&self, key: K, value: V) {
        LruCache::set(self, key, value);
    }

    fn get(&self, key: &K) -> Option<V> {
        LruCache::get(self, key)
    }

    fn remove(&self, key: &K) -> Option<V> {
        LruCache::remove(self, key)
    }

    fn len(&self) -> usize {
        LruCache::len(self)
    }

    fn flush(&self) {
        LruCache::flush(self);
    }
}

impl<K, V> fmt::Debug for LruCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.config.capacity)
            .field("ttl", &self.config.ttl)
            .field("len", &self.list.lock().len())
            .field("has_source", &self.source.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::atomic::AtomicUsize;
    use std::thread;
    use test_case::test_case;

    fn make_cache(capacity: usize) -> LruCache<String, i32> {
        LruCache::with_config(CacheConfig::new(capacity, Duration::from_secs(2)))
    }

    fn set_all(cache: &LruCache<String, i32>, pairs: &[(&str, i32)]) {
        for (key, value) in pairs {
            cache.set(key.to_string(), *value);
        }
    }

    /// List and index describe the same keys.
    fn assert_consistent<K, V>(cache: &LruCache<K, V>)
    where
        K: Eq + Hash + Clone + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        let list = cache.list.lock();
        assert_eq!(list.len(), cache.index.len());
        for entry in list.iter() {
            let node = cache.index.load(&entry.key).expect("key missing from index");
            assert!(list.contains(node));
        }
    }

    #[test]
    fn test_set_get() {
        let cache = make_cache(10);
        cache.set("alice".into(), 1);

        assert_eq!(cache.get("alice"), Some(1));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_miss() {
        let cache = make_cache(10);
        assert_eq!(cache.get("nonexistent"), None);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_update_in_place() {
        let cache = make_cache(3);
        cache.set("key2".into(), 2);
        cache.set("key2".into(), 22);

        assert_eq!(cache.get("key2"), Some(22));
        assert_eq!(cache.len(), 1);

        let stats = cache.stats();
        assert_eq!(stats.insertions, 1);
        assert_eq!(stats.updates, 1);
        assert_consistent(&cache);
    }

    #[test]
    fn test_update_refreshes_recency() {
        let cache = make_cache(2);
        set_all(&cache, &[("a", 1), ("b", 2), ("a", 10), ("c", 3)]);

        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.get("a"), Some(10));
        assert_eq!(cache.get("c"), Some(3));
    }

    #[test]
    fn test_scenario_plain_eviction() {
        let cache = make_cache(3);
        set_all(&cache, &[("a", 1), ("b", 2), ("c", 3), ("d", 4)]);

        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), Some(2));
        assert_eq!(cache.get("c"), Some(3));
        assert_eq!(cache.get("d"), Some(4));
        assert_eq!(cache.stats().evictions, 1);
        assert_consistent(&cache);
    }

    #[test]
    fn test_scenario_recency_refresh() {
        let cache = make_cache(3);
        set_all(&cache, &[("a", 1), ("b", 2), ("c", 3)]);
        assert_eq!(cache.get("a"), Some(1));
        cache.set("d".into(), 4);

        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.get("a"), Some(1));
        assert_eq!(cache.get("c"), Some(3));
        assert_eq!(cache.get("d"), Some(4));
        assert_consistent(&cache);
    }

    #[test_case(1 ; "single slot")]
    #[test_case(3 ; "small")]
    #[test_case(64 ; "larger")]
    fn test_overflow_evicts_first_key(capacity: usize) {
        let cache: LruCache<usize, usize> =
            LruCache::with_config(CacheConfig::new(capacity, Duration::from_secs(60)));
        for i in 0..=capacity {
            cache.set(i, i);
        }

        assert_eq!(cache.len(), capacity);
        assert_eq!(cache.get(&0), None);
        for i in 1..=capacity {
            assert_eq!(cache.get(&i), Some(i));
        }
    }

    #[test]
    fn test_keys_most_recent_first() {
        let cache = make_cache(5);
        set_all(&cache, &[("a", 1), ("b", 2), ("c", 3)]);
        cache.get("a");

        assert_eq!(cache.keys(), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_unbounded_never_evicts() {
        let cache: LruCache<u32, u32> = LruCache::with_config(CacheConfig::unbounded());
        for i in 0..5000 {
            cache.set(i, i);
        }
        assert_eq!(cache.len(), 5000);
        assert_eq!(cache.stats().evictions, 0);
    }

    #[test]
    fn test_ttl_expiration_is_lazy() {
        let cache = make_cache(10);
        cache.set_with_ttl("alice".into(), 1, Duration::from_millis(1));

        std::thread::sleep(Duration::from_millis(10));

        assert_eq!(cache.get("alice"), None);
        // Still resident until something removes it
        assert_eq!(cache.len(), 1);
        assert!(cache.contains_key("alice"));
        assert_eq!(cache.stats().expired, 1);
    }

    #[test]
    fn test_expired_entry_holds_slot_until_evicted() {
        let cache = make_cache(2);
        cache.set_with_ttl("stale".into(), 1, Duration::from_millis(1));
        cache.set("fresh".into(), 2);

        std::thread::sleep(Duration::from_millis(10));
        assert_eq!(cache.get("stale"), None);
        assert_eq!(cache.len(), 2);

        cache.set("newest".into(), 3);
        assert!(!cache.contains_key("stale"));
        assert_eq!(cache.get("fresh"), Some(2));
        assert_eq!(cache.get("newest"), Some(3));
        assert_consistent(&cache);
    }

    #[test]
    fn test_update_resets_ttl_by_default() {
        let cache: LruCache<String, i32> =
            LruCache::with_config(CacheConfig::new(10, Duration::from_millis(200)));
        cache.set("k".into(), 1);
        thread::sleep(Duration::from_millis(130));
        cache.set("k".into(), 2);
        thread::sleep(Duration::from_millis(130));

        assert_eq!(cache.get("k"), Some(2));
    }

    #[test]
    fn test_update_keeps_ttl_when_refresh_disabled() {
        let config = CacheConfig::new(10, Duration::from_millis(200)).with_refresh_ttl_on_update(false);
        let cache: LruCache<String, i32> = LruCache::with_config(config);
        cache.set("k".into(), 1);
        thread::sleep(Duration::from_millis(130));
        cache.set("k".into(), 2);
        thread::sleep(Duration::from_millis(130));

        assert_eq!(cache.get("k"), None);
        assert_eq!(cache.peek("k"), None);
        assert_eq!(cache.remove("k"), Some(2));
    }

    #[test]
    fn test_huge_ttl_never_expires() {
        let cache: LruCache<u8, u8> = LruCache::with_config(CacheConfig::new(4, Duration::MAX));
        cache.set(1, 1);
        assert_eq!(cache.get(&1), Some(1));
        assert_eq!(cache.purge_expired(), 0);
    }

    #[test]
    fn test_remove() {
        let cache = make_cache(10);
        cache.set("alice".into(), 1);

        assert_eq!(cache.remove("alice"), Some(1));
        assert_eq!(cache.get("alice"), None);
        assert_eq!(cache.len(), 0);
        assert_consistent(&cache);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let cache = make_cache(10);
        cache.set("alice".into(), 1);

        assert_eq!(cache.remove("bob"), None);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().removals, 0);
    }

    #[test]
    fn test_flush() {
        let cache = make_cache(10);
        set_all(&cache, &[("a", 1), ("b", 2)]);

        cache.flush();

        assert!(cache.is_empty());
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), None);
        assert!(!cache.contains_key("a"));

        cache.set("c".into(), 3);
        assert_eq!(cache.get("c"), Some(3));
        assert_consistent(&cache);
    }

    #[test]
    fn test_peek_does_not_refresh_recency() {
        let cache = make_cache(2);
        set_all(&cache, &[("a", 1), ("b", 2)]);

        assert_eq!(cache.peek("a"), Some(1));
        cache.set("c".into(), 3);

        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn test_purge_expired() {
        let cache = make_cache(10);
        cache.set_with_ttl("alice".into(), 1, Duration::from_millis(1));
        cache.set("bob".into(), 2);
        cache.set_with_ttl("carol".into(), 3, Duration::from_millis(1));

        std::thread::sleep(Duration::from_millis(10));

        assert_eq!(cache.purge_expired(), 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("bob"), Some(2));
        assert_eq!(cache.stats().removals, 2);
        assert_consistent(&cache);
    }

    #[test]
    fn test_stats() {
        let cache = make_cache(2);
        set_all(&cache, &[("a", 1), ("b", 2), ("c", 3)]);
        cache.get("b");
        cache.get("zzz");

        let stats = cache.stats();
        assert_eq!(stats.insertions, 3);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.len, 2);
        assert_eq!(stats.capacity, 2);
    }

    #[test]
    fn test_trait_object() {
        let cache: Box<dyn KeyValueCache<String, i32>> = Box::new(make_cache(2));
        cache.set("a".into(), 1);
        assert_eq!(cache.get(&"a".to_string()), Some(1));
        assert_eq!(cache.len(), 1);
        cache.flush();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_get_or_fetch_without_source() {
        let cache = make_cache(2);
        cache.set("a".into(), 1);

        assert_eq!(tokio_test::block_on(cache.get_or_fetch(&"a".to_string())).unwrap(), 1);
        let err = tokio_test::block_on(cache.get_or_fetch(&"b".to_string())).unwrap_err();
        assert!(err.is_miss());
        assert_eq!(cache.stats().fetches, 0);
    }

    #[test]
    fn test_concurrent_set_same_new_key() {
        let cache = Arc::new(make_cache(100));
        let handles: Vec<_> = (0..16)
            .map(|t| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for _ in 0..200 {
                        cache.set("shared".into(), t);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 1);
        assert_consistent(&cache);
    }

    #[test]
    fn test_concurrent_mixed_workload() {
        let capacity = 64;
        let cache: Arc<LruCache<u32, u32>> =
            Arc::new(LruCache::with_config(CacheConfig::new(capacity, Duration::from_secs(60))));
        let observed_over_capacity = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8u32)
            .map(|t| {
                let cache = Arc::clone(&cache);
                let over = Arc::clone(&observed_over_capacity);
                thread::spawn(move || {
                    for i in 0..2000u32 {
                        let key = (t * 7 + i) % 200;
                        match i % 4 {
                            0 | 1 => cache.set(key, i),
                            2 => {
                                cache.get(&key);
                            }
                            _ => {
                                cache.remove(&key);
                            }
                        }
                        if cache.len() > capacity {
                            over.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(observed_over_capacity.load(Ordering::Relaxed), 0);
        assert_consistent(&cache);
    }

    proptest! {
        #[test]
        fn prop_len_never_exceeds_capacity(
            capacity in 1usize..16,
            keys in prop::collection::vec(0u8..32, 0..200),
        ) {
            let cache: LruCache<u8, u8> =
                LruCache::with_config(CacheConfig::new(capacity, Duration::from_secs(60)));
            for key in keys {
                cache.set(key, key);
                prop_assert!(cache.len() <= capacity);
                prop_assert_eq!(cache.get(&key), Some(key));
            }
            let list_len = cache.list.lock().len();
            prop_assert_eq!(list_len, cache.index.len());
        }
    }
}
