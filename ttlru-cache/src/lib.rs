//! # TTLRU Cache
//!
//! Thread-safe LRU cache with lazy TTL expiry and optional fetch-through
//! loading from an upstream [`Source`].
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use ttlru_cache::{CacheConfig, LruCache};
//!
//! let cache = LruCache::with_config(CacheConfig::new(3, Duration::from_secs(2)));
//! for (key, value) in [("a", 1), ("b", 2), ("c", 3), ("d", 4)] {
//!     cache.set(key, value);
//! }
//!
//! // "a" was least recently used when "d" arrived
//! assert_eq!(cache.get("a"), None);
//! assert_eq!(cache.get("d"), Some(4));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod cache;
mod source;
mod sweeper;

pub use cache::LruCache;
pub use source::FnSource;
pub use sweeper::Sweeper;

// Re-export the configuration and error surface from core
pub use ttlru_core::{is_miss, CacheConfig, CacheError, CacheStats, KeyValueCache, Result, Source};
