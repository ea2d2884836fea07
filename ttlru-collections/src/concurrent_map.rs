//! Thread-safe key/value map.
//!
//! Thin typed layer over `DashMap`: reads and writes lock a single shard, so
//! readers of unrelated keys never contend.

use std::any::Any;
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use dashmap::DashMap;

/// Type-erased value for maps holding heterogeneous data.
pub type AnyValue = Arc<dyn Any + Send + Sync>;

/// Concurrent map with load/store/delete/range semantics.
///
/// All operations take `&self` and may be called from any thread.
pub struct ConcurrentMap<K, V> {
    inner: DashMap<K, V>,
}

impl<K, V> ConcurrentMap<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            inner: DashMap::new(),
        }
    }

    /// Creates an empty map with preallocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: DashMap::with_capacity(capacity),
        }
    }

    /// Returns a copy of the value stored under `key`.
    pub fn load<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.inner.get(key).map(|entry| entry.value().clone())
    }

    /// Stores `value` under `key`, returning the value it replaced.
    pub fn store(&self, key: K, value: V) -> Option<V> {
        self.inner.insert(key, value)
    }

    /// Deletes `key`, returning its value if present.
    pub fn delete<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(key).map(|(_, value)| value)
    }

    /// Returns true if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(key)
    }

    /// Calls `f` for each entry until it returns `false`.
    ///
    /// No ordering is guaranteed. Each shard is read-locked while visited, so
    /// `f` must not write to this map.
    pub fn range<F>(&self, mut f: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        for entry in self.inner.iter() {
            if !f(entry.key(), entry.value()) {
                break;
            }
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.inner.clear();
    }
}

impl<K> ConcurrentMap<K, AnyValue>
where
    K: Eq + Hash,
{
    /// Stores `value` behind a type-erased pointer.
    pub fn store_any<T>(&self, key: K, value: T)
    where
        T: Any + Send + Sync,
    {
        self.inner.insert(key, Arc::new(value));
    }

    /// Loads the value under `key` as a `T`.
    ///
    /// A value of any other type reads as absent.
    pub fn load_as<T, Q>(&self, key: &Q) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.load(key)?.downcast::<T>().ok()
    }
}

impl<K, V> Default for ConcurrentMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for ConcurrentMap<K, V>
where
    K: Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentMap")
            .field("len", &self.inner.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_store_load_delete() {
        let map = ConcurrentMap::new();
        assert_eq!(map.store("a".to_string(), 1), None);
        assert_eq!(map.store("a".to_string(), 2), Some(1));

        assert_eq!(map.load("a"), Some(2));
        assert_eq!(map.len(), 1);

        assert_eq!(map.delete("a"), Some(2));
        assert_eq!(map.load("a"), None);
        assert_eq!(map.delete("a"), None);
        assert!(map.is_empty());
    }

    #[test]
    fn test_range_visits_all() {
        let map = ConcurrentMap::new();
        for i in 0..10u32 {
            map.store(i, i * 10);
        }

        let mut sum = 0;
        map.range(|_, v| {
            sum += v;
            true
        });
        assert_eq!(sum, 450);
    }

    #[test]
    fn test_range_stops_early() {
        let map = ConcurrentMap::new();
        for i in 0..10u32 {
            map.store(i, i);
        }

        let mut visited = 0;
        map.range(|_, _| {
            visited += 1;
            visited < 3
        });
        assert_eq!(visited, 3);
    }

    #[test]
    fn test_clear() {
        let map = ConcurrentMap::new();
        map.store(1, "one");
        map.store(2, "two");
        map.clear();
        assert!(map.is_empty());
        assert!(!map.contains_key(&1));
    }

    #[test]
    fn test_load_as_type_mismatch_is_miss() {
        let map: ConcurrentMap<&str, AnyValue> = ConcurrentMap::new();
        map.store_any("n", 42u32);
        map.store_any("s", String::from("hello"));

        assert_eq!(map.load_as::<u32, _>("n").as_deref(), Some(&42));
        assert_eq!(map.load_as::<String, _>("s").as_deref().map(String::as_str), Some("hello"));

        assert!(map.load_as::<String, _>("n").is_none());
        assert!(map.load_as::<u64, _>("n").is_none());
        assert!(map.load_as::<u32, _>("missing").is_none());
    }

    #[test]
    fn test_concurrent_store() {
        let map = Arc::new(ConcurrentMap::new());
        let handles: Vec<_> = (0..8u32)
            .map(|t| {
                let map = Arc::clone(&map);
                thread::spawn(move || {
                    for i in 0..100u32 {
                        map.store(t * 100 + i, i);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(map.len(), 800);
    }
}
