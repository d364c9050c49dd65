//! In-memory cache used by service unit tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::infrastructure::cache::{CacheKey, CacheResult, CacheService};

/// HashMap-backed [`CacheService`] that records call counts.
///
/// TTLs are accepted and ignored; unit tests never wait for expiry.
pub(crate) struct MemoryCache {
    store: Mutex<HashMap<String, String>>,
    sets: AtomicUsize,
}

impl MemoryCache {
    pub(crate) fn new() -> Self {
        Self {
            store: Mutex::new(HashMap::new()),
            sets: AtomicUsize::new(0),
        }
    }

    pub(crate) fn set_count(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }

    pub(crate) fn raw_value(&self, key: &str) -> Option<String> {
        self.store.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &CacheKey) -> CacheResult<Option<String>> {
        Ok(self.store.lock().unwrap().get(key.as_str()).cloned())
    }

    async fn set(
        &self,
        key: &CacheKey,
        payload: String,
        _ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        self.store
            .lock()
            .unwrap()
            .insert(key.as_str().to_string(), payload);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
