//! Closure adapter for fetch-through sources.

use std::future::Future;

use async_trait::async_trait;

use ttlru_core::error::Result;
use ttlru_core::traits::Source;

/// [`Source`] backed by an async closure taking the key by value.
///
/// ```rust
/// use ttlru_cache::{CacheError, FnSource, LruCache};
///
/// let cache: LruCache<u32, String> = LruCache::new().with_source(FnSource::new(|id: u32| async move {
///     if id == 0 {
///         return Err(CacheError::Miss);
///     }
///     Ok(format!("user-{id}"))
/// }));
/// assert!(cache.has_source());
/// ```
pub struct FnSource<F> {
    f: F,
}

impl<F> FnSource<F> {
    /// Wraps `f`.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<K, V, F, Fut> Source<K, V> for FnSource<F>
where
    K: Clone + Send + Sync + 'static,
    V: Send + 'static,
    F: Fn(K) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<V>> + Send + 'static,
{
    async fn fetch(&self, key: &K) -> Result<V> {
        (self.f)(key.clone()).await
    }
}
