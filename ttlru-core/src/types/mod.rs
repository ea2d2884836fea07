//! Domain types for TTLRU.
//!
//! - [`CacheConfig`]: Capacity, TTL, and refresh policy of a cache
//! - [`CacheStats`]: Point-in-time counters reported by a cache

mod config;
mod stats;

pub use config::*;
pub use stats::*;
