//! Optional background purge of expired entries.
//!
//! Caches never sweep on their own; expiry stays lazy unless a [`Sweeper`] is
//! spawned for them.

use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::cache::LruCache;

/// Shortest interval a sweeper will tick at.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Handle to a task that periodically calls [`LruCache::purge_expired`].
///
/// The task stops when the handle is dropped or [`stop`](Self::stop)ped.
#[derive(Debug)]
pub struct Sweeper {
    handle: JoinHandle<()>,
    interval: Duration,
}

impl Sweeper {
    /// Spawns a sweep task on the current Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn spawn<K, V>(cache: Arc<LruCache<K, V>>, interval: Duration) -> Self
    where
        K: Eq + Hash + Clone + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        let interval = interval.max(MIN_INTERVAL);
        info!(?interval, "Starting expiry sweeper");

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // First tick completes immediately
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let purged = cache.purge_expired();
                if purged > 0 {
                    debug!(purged, "Sweep removed expired entries");
                }
            }
        });

        Self { handle, interval }
    }

    /// Spawns a sweeper if the cache's configuration asks for one.
    pub fn from_config<K, V>(cache: Arc<LruCache<K, V>>) -> Option<Self>
    where
        K: Eq + Hash + Clone + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        let interval = cache.config().sweep_interval?;
        Some(Self::spawn(cache, interval))
    }

    /// Returns the sweep interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true while the sweep task is alive.
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stops the sweep task.
    pub fn stop(self) {
        self.handle.abort();
    }
}

impl Drop for Sweeper {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
