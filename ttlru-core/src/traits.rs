//! Common traits for TTLRU.
//!
//! These traits define the seams between the cache and its callers, enabling
//! alternative implementations and test doubles.

use async_trait::async_trait;

use crate::error::Result;

// ═══════════════════════════════════════════════════════════════════════════════
// SOURCE TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Upstream loader consulted by fetch-through reads on a miss.
///
/// Implementations might be:
/// - A database lookup
/// - An HTTP call to another service
/// - A computation too expensive to repeat
///
/// Return [`CacheError::Miss`](crate::CacheError::Miss) when the key does not
/// exist upstream, and [`CacheError::SourceFailed`](crate::CacheError::SourceFailed)
/// for anything else.
#[async_trait]
pub trait Source<K, V>: Send + Sync
where
    K: Send + Sync,
    V: Send,
{
    /// Loads the value for `key`.
    async fn fetch(&self, key: &K) -> Result<V>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Interface of a thread-safe key/value cache.
///
/// All operations are total: they never fail and never panic.
pub trait KeyValueCache<K, V>: Send + Sync {
    /// Stores `value` under `key` and marks it most recently used.
    fn set(&self, key: K, value: V);

    /// Returns the live value for `key`, marking it most recently used.
    fn get(&self, key: &K) -> Option<V>;

    /// Removes `key`, returning its value if it was resident.
    fn remove(&self, key: &K) -> Option<V>;

    /// Returns the number of resident entries, expired ones included.
    fn len(&self) -> usize;

    /// Returns true if nothing is resident.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every entry.
    fn flush(&self);
}
