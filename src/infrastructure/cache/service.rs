//! Cache service trait, payload convention, and error types.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use super::key::CacheKey;

/// TTL applied to cache entries when the caller does not specify one.
pub const DEFAULT_TTL_SECONDS: u64 = 3600;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
    OperationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
            Self::OperationError(e) => write!(f, "Cache operation error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for the expiring key/value store in front of read queries.
///
/// Implementations must be thread-safe and fail open: a cache failure
/// degrades the lookup to the store-of-truth, it never fails the request.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the raw serialized payload stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(payload))` if present and not expired
    /// - `Ok(None)` on miss or on a runtime error (fail-open behavior)
    ///
    /// # Errors
    ///
    /// Production implementations log runtime errors and report a miss
    /// instead of returning them.
    async fn get(&self, key: &CacheKey) -> CacheResult<Option<String>>;

    /// Stores a serialized payload under `key` with the given expiry.
    ///
    /// # Arguments
    ///
    /// - `ttl_seconds` - expiry in seconds; [`DEFAULT_TTL_SECONDS`] if `None`
    ///
    /// # Errors
    ///
    /// Production implementations log runtime errors and return `Ok(())`
    /// to avoid disrupting the request flow.
    async fn set(&self, key: &CacheKey, payload: String, ttl_seconds: Option<u64>)
        -> CacheResult<()>;

    /// Checks if the cache backend is reachable.
    ///
    /// Used by the health endpoint to report cache status.
    async fn health_check(&self) -> bool;
}

/// Cache payload convention: every entry is a JSON array of records, even
/// when the logical result is a single record. Single-record lookups cache a
/// one-element list and read back its first element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CachedList<T>(Vec<T>);

impl<T> CachedList<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self(records)
    }

    pub fn into_inner(self) -> Vec<T> {
        self.0
    }

    /// Consumes the list and returns its first record, if any.
    pub fn into_first(self) -> Option<T> {
        self.0.into_iter().next()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<T> From<Vec<T>> for CachedList<T> {
    fn from(records: Vec<T>) -> Self {
        Self(records)
    }
}

impl dyn CacheService {
    /// Retrieves and decodes a [`CachedList`] stored under `key`.
    ///
    /// A malformed payload is logged and reported as a miss; it is never
    /// surfaced to the caller as an error.
    pub async fn get_list<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<CachedList<T>> {
        let raw = match self.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Cache GET failed for {}: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(list) => Some(list),
            Err(e) => {
                warn!("Malformed cache payload for {}: {}", key, e);
                None
            }
        }
    }

    /// Encodes `records` as a [`CachedList`] payload and stores it under
    /// `key`. A slice serializes to the same JSON array `get_list` decodes.
    ///
    /// Serialization or store failures are logged and swallowed.
    pub async fn put_list<T: Serialize>(
        &self,
        key: &CacheKey,
        records: &[T],
        ttl_seconds: Option<u64>,
    ) {
        let payload = match serde_json::to_string(records) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to encode cache payload for {}: {}", key, e);
                return;
            }
        };

        debug!("Cache populate: {} ({} records)", key, records.len());
        if let Err(e) = self.set(key, payload, ttl_seconds).await {
            warn!("Cache SET failed for {}: {}", key, e);
        }
    }
}
