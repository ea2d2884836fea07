//! Cache statistics.

use serde::{Deserialize, Serialize};

/// Point-in-time cache statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Reads that returned a live value
    pub hits: u64,
    /// Reads that found nothing resident
    pub misses: u64,
    /// Reads that found an expired entry (counted as misses by callers)
    pub expired: u64,
    /// New entries created by `set`
    pub insertions: u64,
    /// In-place updates of a resident key
    pub updates: u64,
    /// Entries dropped by LRU pressure
    pub evictions: u64,
    /// Entries dropped by `remove` or an expiry purge
    pub removals: u64,
    /// Source fetches started by fetch-through reads
    pub fetches: u64,
    /// Source fetches that returned an error, source-reported misses included
    pub fetch_errors: u64,
    /// Resident entries, expired ones included
    pub len: usize,
    /// Maximum resident entries (`0` = unbounded)
    pub capacity: usize,
}

impl CacheStats {
    /// Total reads, expired hits included.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses + self.expired
    }

    /// Hit rate as a fraction in `[0.0, 1.0]`. Returns 0.0 if nothing was read.
    pub fn hit_rate(&self) -> f64 {
        let total = self.lookups();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_rate_empty() {
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_counts_expired_as_miss() {
        let stats = CacheStats {
            hits: 2,
            misses: 1,
            expired: 1,
            ..Default::default()
        };
        assert_eq!(stats.lookups(), 4);
        assert!((stats.hit_rate() - 0.5).abs() < f64::EPSILON);
    }
}
