//! Cache configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{CacheError, Result};

/// Cache configuration.
///
/// Capacity and TTL are fixed once a cache is built from this value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of resident entries. `0` disables LRU eviction.
    pub capacity: usize,
    /// Time-to-live applied by `set`
    #[serde(rename = "ttl_ms", with = "duration_ms")]
    pub ttl: Duration,
    /// Whether re-setting an existing key resets its expiry
    pub refresh_ttl_on_update: bool,
    /// Interval for an optional background sweep of expired entries
    #[serde(rename = "sweep_interval_ms", with = "option_duration_ms")]
    pub sweep_interval: Option<Duration>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            ttl: DEFAULT_TTL,
            refresh_ttl_on_update: true,
            sweep_interval: None,
        }
    }
}

impl CacheConfig {
    /// Creates a config with the given capacity and TTL.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            capacity,
            ttl,
            ..Default::default()
        }
    }

    /// Creates a config with no capacity limit.
    pub fn unbounded() -> Self {
        Self {
            capacity: UNBOUNDED,
            ..Default::default()
        }
    }

    /// Sets the maximum number of entries.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the time-to-live.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Chooses whether updates of an existing key reset its expiry.
    pub fn with_refresh_ttl_on_update(mut self, refresh: bool) -> Self {
        self.refresh_ttl_on_update = refresh;
        self
    }

    /// Records a background sweep interval.
    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = Some(interval);
        self
    }

    /// Returns true if LRU eviction is enabled.
    pub fn is_bounded(&self) -> bool {
        self.capacity != UNBOUNDED
    }

    /// Checks the configuration for values no cache can honor.
    pub fn validate(&self) -> Result<()> {
        if self.ttl.is_zero() {
            return Err(CacheError::ConfigError("ttl must be greater than zero".into()));
        }
        if matches!(self.sweep_interval, Some(interval) if interval.is_zero()) {
            return Err(CacheError::ConfigError(
                "sweep interval must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Builds a configuration from the environment, after loading `.env` if present.
    ///
    /// Unset variables keep their defaults; malformed ones are rejected.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>(ENV_CAPACITY)? {
            config.capacity = capacity;
        }
        if let Some(ttl_ms) = read_env::<u64>(ENV_TTL_MS)? {
            config.ttl = Duration::from_millis(ttl_ms);
        }
        if let Ok(raw) = std::env::var(ENV_REFRESH_TTL) {
            config.refresh_ttl_on_update = parse_flag(ENV_REFRESH_TTL, &raw)?;
        }
        if let Some(interval_ms) = read_env::<u64>(ENV_SWEEP_INTERVAL_MS)? {
            config.sweep_interval = (interval_ms > 0).then(|| Duration::from_millis(interval_ms));
        }

        config.validate()?;
        Ok(config)
    }
}

fn read_env<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| CacheError::ConfigError(format!("{name}: invalid value '{raw}'"))),
        Err(_) => Ok(None),
    }
}

fn parse_flag(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(CacheError::ConfigError(format!("{name}: invalid flag '{raw}'"))),
    }
}

/// Durations travel as whole milliseconds in a `u64`.
///
/// Values past `u64::MAX` ms saturate, and `u64::MAX` reads back as
/// `Duration::MAX`, so a never-expiring TTL survives a round trip.
fn to_millis(value: &Duration) -> u64 {
    u64::try_from(value.as_millis()).unwrap_or(u64::MAX)
}

fn from_millis(ms: u64) -> Duration {
    if ms == u64::MAX {
        Duration::MAX
    } else {
        Duration::from_millis(ms)
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(super::to_millis(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(super::from_millis)
    }
}

mod option_duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => serializer.serialize_some(&super::to_millis(d)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        Option::<u64>::deserialize(deserializer).map(|ms| ms.map(super::from_millis))
    }
}
