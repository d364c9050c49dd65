//! No-op cache implementation for degraded mode or disabled caching.

use super::key::CacheKey;
use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Used when Redis is unavailable or caching is explicitly disabled. `get`
/// always reports a miss and `set` succeeds without storing anything, so
/// every lookup falls through to the store-of-truth.
///
/// # Use Cases
///
/// - Development environments without Redis
/// - Testing scenarios where caching should be bypassed
/// - Fallback when the Redis connection fails at startup
pub struct NullCache;

impl NullCache {
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get(&self, _key: &CacheKey) -> CacheResult<Option<String>> {
        Ok(None)
    }

    async fn set(
        &self,
        _key: &CacheKey,
        _payload: String,
        _ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::cache::{CacheDomain, CacheSelector};
    use std::sync::Arc;

    #[tokio::test]
    async fn get_always_misses_and_set_is_a_no_op() {
        let cache: Arc<dyn CacheService> = Arc::new(NullCache::new());
        let key = CacheKey::new(CacheDomain::Owners, CacheSelector::Id(1));

        cache
            .set(&key, "[{\"id\":1}]".to_string(), None)
            .await
            .unwrap();
        assert_eq!(cache.get(&key).await.unwrap(), None);
        assert!(cache.health_check().await);
    }
}
