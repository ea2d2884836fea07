//! Defaults and environment variable names for TTLRU.

use std::time::Duration;

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE DEFAULTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Default maximum number of resident entries (`i16::MAX`).
///
/// Large enough to be effectively unbounded for typical use.
pub const DEFAULT_CAPACITY: usize = i16::MAX as usize;

/// Default time-to-live in seconds (2^6).
pub const DEFAULT_TTL_SECS: u64 = 1 << 6;

/// Default time-to-live.
pub const DEFAULT_TTL: Duration = Duration::from_secs(DEFAULT_TTL_SECS);

/// A capacity of zero disables LRU eviction entirely.
pub const UNBOUNDED: usize = 0;

// ═══════════════════════════════════════════════════════════════════════════════
// ENVIRONMENT
// ═══════════════════════════════════════════════════════════════════════════════

/// Maximum entry count.
pub const ENV_CAPACITY: &str = "TTLRU_CAPACITY";

/// Time-to-live in milliseconds.
pub const ENV_TTL_MS: &str = "TTLRU_TTL_MS";

/// Whether re-setting an existing key resets its expiry (`true`/`false`, `1`/`0`).
pub const ENV_REFRESH_TTL: &str = "TTLRU_REFRESH_TTL";

/// Background sweep interval in milliseconds. Unset or `0` disables sweeping.
pub const ENV_SWEEP_INTERVAL_MS: &str = "TTLRU_SWEEP_INTERVAL_MS";
