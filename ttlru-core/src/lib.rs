//! # TTLRU Core
//!
//! Core types, errors, and traits for the TTLRU in-memory cache.
//!
//! This crate provides the foundational building blocks used by all other TTLRU crates:
//!
//! - **Types**: Cache configuration and statistics
//! - **Errors**: The miss / source-failure taxonomy of fetch-through reads
//! - **Constants**: Default capacity, TTL, and environment variable names
//! - **Traits**: The fetch-through [`Source`] and the [`KeyValueCache`] interface
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use ttlru_core::{CacheConfig, CacheError};
//!
//! let config = CacheConfig::default()
//!     .with_capacity(3)
//!     .with_ttl(Duration::from_secs(2));
//! assert!(config.validate().is_ok());
//! assert!(CacheError::Miss.is_miss());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{is_miss, BoxError, CacheError, Result};
pub use traits::*;
pub use types::*;
