//! Caching layer in front of read queries.
//!
//! Provides the [`CacheService`] trait with two implementations selected once
//! at startup:
//! - [`RedisCache`] - production Redis-backed cache
//! - [`NullCache`] - degraded no-op used when Redis is unreachable or unset
//!
//! Keys are derived by [`CacheKey`] from a [`CacheDomain`] and a
//! [`CacheSelector`]; payloads always follow the [`CachedList`] convention.

mod key;
mod null_cache;
mod redis_cache;
mod service;

pub use key::{CacheDomain, CacheKey, CacheSelector};
pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheService, CachedList, DEFAULT_TTL_SECONDS};

#[cfg(test)]
pub use service::MockCacheService;
