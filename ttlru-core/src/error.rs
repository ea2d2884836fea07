//! Error types for TTLRU.
//!
//! Structural cache operations never fail. Only fetch-through reads surface
//! errors, and they surface exactly two classes: a miss and a failed source.

use thiserror::Error;

/// Boxed error returned by fetch-through sources.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias using `CacheError`.
pub type Result<T> = std::result::Result<T, CacheError>;

/// Main error type for all TTLRU operations.
#[derive(Debug, Error)]
pub enum CacheError {
    // ═══════════════════════════════════════════════════════════════════════════
    // READ ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Key is absent or expired and no source could supply it.
    ///
    /// Sources also return this to report that the key does not exist upstream.
    #[error("cache miss")]
    Miss,

    /// The fetch-through source failed.
    #[error("Source fetch failed: {0}")]
    SourceFailed(#[source] BoxError),

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// JSON configuration could not be parsed.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ═══════════════════════════════════════════════════════════════════════════
    // INTERNAL ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Internal invariant violation (should never happen).
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl CacheError {
    /// Wraps an arbitrary source failure.
    pub fn from_source<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        CacheError::SourceFailed(err.into())
    }

    /// Returns true if this error is a miss, directly or wrapped by a source failure.
    pub fn is_miss(&self) -> bool {
        match self {
            CacheError::Miss => true,
            CacheError::SourceFailed(inner) => {
                let mut current: Option<&(dyn std::error::Error + 'static)> = Some(inner.as_ref());
                while let Some(err) = current {
                    if let Some(cache_err) = err.downcast_ref::<CacheError>() {
                        if cache_err.is_miss() {
                            return true;
                        }
                    }
                    current = err.source();
                }
                false
            }
            _ => false,
        }
    }

    /// Returns true if the source callback failed.
    pub fn is_source_error(&self) -> bool {
        matches!(self, CacheError::SourceFailed(_))
    }

    /// Returns true if this error is recoverable (can retry).
    ///
    /// A miss is final for the current state of the source; a source failure may
    /// be transient.
    pub fn is_recoverable(&self) -> bool {
        self.is_source_error() && !self.is_miss()
    }

    /// Returns true if this is a configuration error.
    pub fn is_config_error(&self) -> bool {
        matches!(self, CacheError::ConfigError(_) | CacheError::JsonError(_))
    }
}

/// Returns true if `err` reports a cache miss.
pub fn is_miss(err: &CacheError) -> bool {
    err.is_miss()
}
