//! Redis-backed cache implementation.

use super::key::CacheKey;
use super::service::{CacheError, CacheResult, CacheService, DEFAULT_TTL_SECONDS};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

/// Redis cache implementation for read-through lookups.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection
/// reuse. All operations are fail-open: errors are logged but don't propagate
/// to callers.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: u64,
}

impl RedisCache {
    /// Connects to Redis, validates the connection with a PING, and
    /// configures the default TTL.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `default_ttl_seconds` - TTL applied to cached entries when
    ///   [`CacheService::set`] is called with `ttl_seconds = None`;
    ///   controlled via `CACHE_TTL_SECONDS` env var
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            default_ttl: if default_ttl_seconds == 0 {
                DEFAULT_TTL_SECONDS
            } else {
                default_ttl_seconds
            },
        })
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get(&self, key: &CacheKey) -> CacheResult<Option<String>> {
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(key.as_str()).await {
            Ok(Some(payload)) => {
                debug!("Cache HIT: {}", key);
                Ok(Some(payload))
            }
            Ok(None) => {
                debug!("Cache MISS: {}", key);
                Ok(None)
            }
            Err(e) => {
                error!("Redis GET error for {}: {}", key, e);
                Ok(None)
            }
        }
    }

    async fn set(
        &self,
        key: &CacheKey,
        payload: String,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        let mut conn = self.client.clone();
        let ttl_seconds = ttl_seconds.unwrap_or(self.default_ttl);

        match conn
            .set_ex::<_, _, ()>(key.as_str(), payload, ttl_seconds)
            .await
        {
            Ok(_) => {
                debug!("Cache SET: {} (TTL: {}s)", key, ttl_seconds);
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for {}: {}", key, e);
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
