//! Owner lookup service with read-through caching.

use std::sync::Arc;

use tracing::debug;

use crate::application::dto::{OwnerBasicDto, OwnerFullDto};
use crate::domain::repositories::OwnerRepository;
use crate::error::AppError;
use crate::infrastructure::cache::{CacheDomain, CacheKey, CacheSelector, CacheService};

/// Service for owner lookups.
///
/// Basic lookups are read-through cached: check the cache by derived key, on
/// a hit deserialize (and filter in-process for name lookups), on a miss
/// query the repository, map to DTOs, populate the cache, return. Full
/// lookups go straight to the repository.
///
/// Cache failures never fail a lookup; the repository is the store of truth.
pub struct OwnerService {
    repository: Arc<dyn OwnerRepository>,
    cache: Arc<dyn CacheService>,
}

impl OwnerService {
    pub fn new(repository: Arc<dyn OwnerRepository>, cache: Arc<dyn CacheService>) -> Self {
        Self { repository, cache }
    }

    /// Lists all owners. Not cached.
    pub async fn find_all(&self) -> Result<Vec<OwnerBasicDto>, AppError> {
        debug!("Fetching all owners (no cache)");
        let records = self.repository.find_all().await?;
        Ok(records.into_iter().map(OwnerBasicDto::from_record).collect())
    }

    /// Finds one owner by id, read-through cached under `owners:{id}`.
    ///
    /// Returns `Ok(None)` when no owner has this id; a miss on an absent id
    /// creates no cache entry.
    pub async fn find_one(&self, id: i64) -> Result<Option<OwnerBasicDto>, AppError> {
        debug!("Fetching owner with id {}", id);
        let key = CacheKey::new(CacheDomain::Owners, CacheSelector::Id(id));

        if let Some(cached) = self.cache.get_list::<OwnerBasicDto>(&key).await {
            // An empty cached list is treated as a miss for single lookups.
            if let Some(dto) = cached.into_first() {
                debug!("Owner {} served from cache", id);
                return Ok(Some(dto));
            }
        }

        let Some(record) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };

        let dto = OwnerBasicDto::from_record(record);
        self.cache
            .put_list(&key, std::slice::from_ref(&dto), None)
            .await;
        Ok(Some(dto))
    }

    /// Finds owners by last name, optionally narrowed by first name.
    ///
    /// The cache key carries the last name only, so one cached list serves
    /// every first-name variant; narrowing is an in-process exact match on
    /// `first_name`. A hit short-circuits the repository even when the
    /// narrowed result is empty.
    pub async fn find_by_name(
        &self,
        last_name: &str,
        first_name: Option<&str>,
    ) -> Result<Vec<OwnerBasicDto>, AppError> {
        debug!(
            "Fetching owners with last_name={}, first_name={:?}",
            last_name, first_name
        );
        let key = CacheKey::new(
            CacheDomain::Owners,
            CacheSelector::Name {
                last: last_name,
                first: None,
            },
        );

        if let Some(cached) = self.cache.get_list::<OwnerBasicDto>(&key).await {
            debug!("Owners named {} served from cache", last_name);
            return Ok(filter_by_first_name(cached.into_inner(), first_name));
        }

        let records = self.repository.find_by_last_name(last_name).await?;
        let mapped: Vec<OwnerBasicDto> = records
            .into_iter()
            .map(OwnerBasicDto::from_record)
            .collect();
        self.cache.put_list(&key, &mapped, None).await;

        Ok(filter_by_first_name(mapped, first_name))
    }

    /// Finds one owner by id with the full association tree. Not cached.
    pub async fn find_full_by_id(&self, id: i64) -> Result<Option<OwnerFullDto>, AppError> {
        debug!("Fetching full owner with id {}", id);
        let record = self.repository.find_full_by_id(id).await?;
        Ok(record.map(OwnerFullDto::from_record))
    }

    /// Finds owners by name with the full association tree. Not cached.
    pub async fn find_full_by_name(
        &self,
        last_name: &str,
        first_name: Option<&str>,
    ) -> Result<Vec<OwnerFullDto>, AppError> {
        debug!(
            "Fetching full owners with last_name={}, first_name={:?}",
            last_name, first_name
        );
        let records = self
            .repository
            .find_full_by_name(last_name, first_name)
            .await?;
        Ok(records.into_iter().map(OwnerFullDto::from_record).collect())
    }
}

fn filter_by_first_name(
    owners: Vec<OwnerBasicDto>,
    first_name: Option<&str>,
) -> Vec<OwnerBasicDto> {
    match first_name {
        Some(first) => owners
            .into_iter()
            .filter(|o| o.first_name == first)
            .collect(),
        None => owners,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::MemoryCache;
    use crate::domain::entities::{Owner, OwnerWithPets, Pet};
    use crate::domain::repositories::MockOwnerRepository;
    use crate::infrastructure::cache::{CacheError, MockCacheService, NullCache};

    fn owner_record(id: i64, first: &str, last: &str) -> OwnerWithPets {
        OwnerWithPets {
            owner: Owner {
                id,
                first_name: first.to_string(),
                last_name: last.to_string(),
                email: format!("{}@example.com", first.to_lowercase()),
                phone: None,
                address: None,
            },
            pets: vec![Pet {
                id: id * 10,
                name: "Fluffy".to_string(),
                species: "Cat".to_string(),
                breed: None,
                birth_date: None,
                vaccinated: true,
                vaccination_date: None,
                owner_id: id,
            }],
        }
    }

    #[tokio::test]
    async fn find_one_populates_cache_and_skips_second_query() {
        let mut repo = MockOwnerRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(owner_record(1, "Alice", "Goldenpaw"))));

        let cache = Arc::new(MemoryCache::new());
        let service = OwnerService::new(Arc::new(repo), cache.clone());

        let first = service.find_one(1).await.unwrap().unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(first.pet_ids, vec![10]);

        // Second lookup is served from cache; the mock would panic on a
        // second repository call.
        let second = service.find_one(1).await.unwrap().unwrap();
        assert_eq!(first, second);
        assert_eq!(cache.set_count(), 1);
    }

    #[tokio::test]
    async fn find_one_absent_id_creates_no_cache_entry() {
        let mut repo = MockOwnerRepository::new();
        repo.expect_find_by_id().times(2).returning(|_| Ok(None));

        let cache = Arc::new(MemoryCache::new());
        let service = OwnerService::new(Arc::new(repo), cache.clone());

        assert!(service.find_one(999).await.unwrap().is_none());
        // Repeated call consults the repository again: nothing was cached.
        assert!(service.find_one(999).await.unwrap().is_none());
        assert_eq!(cache.set_count(), 0);
    }

    #[tokio::test]
    async fn find_by_name_reuses_primary_key_entry_across_filters() {
        let mut repo = MockOwnerRepository::new();
        repo.expect_find_by_last_name()
            .times(1)
            .returning(|_| {
                Ok(vec![
                    owner_record(1, "Alice", "Goldenpaw"),
                    owner_record(7, "Hannah", "Goldenpaw"),
                ])
            });

        let service = OwnerService::new(Arc::new(repo), Arc::new(MemoryCache::new()));

        let all = service.find_by_name("Goldenpaw", None).await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|o| o.last_name == "Goldenpaw"));

        // Same primary selector, different secondary filters: both served
        // from the cached list without touching the repository again.
        let hannah = service
            .find_by_name("Goldenpaw", Some("Hannah"))
            .await
            .unwrap();
        assert_eq!(hannah.len(), 1);
        assert_eq!(hannah[0].id, 7);
        assert_eq!(hannah[0].first_name, "Hannah");

        let alice = service
            .find_by_name("Goldenpaw", Some("Alice"))
            .await
            .unwrap();
        assert_eq!(alice.len(), 1);
        assert_eq!(alice[0].id, 1);
    }

    #[tokio::test]
    async fn find_by_name_hit_with_no_match_returns_empty_without_query() {
        let mut repo = MockOwnerRepository::new();
        repo.expect_find_by_last_name()
            .times(1)
            .returning(|_| Ok(vec![owner_record(1, "Alice", "Goldenpaw")]));

        let service = OwnerService::new(Arc::new(repo), Arc::new(MemoryCache::new()));

        service.find_by_name("Goldenpaw", None).await.unwrap();

        // Cache hit on the broader key short-circuits the repository even
        // though the narrowed result is empty.
        let none = service
            .find_by_name("Goldenpaw", Some("Nobody"))
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn degraded_cache_behaves_like_no_cache() {
        let mut repo = MockOwnerRepository::new();
        repo.expect_find_by_id()
            .times(2)
            .returning(|_| Ok(Some(owner_record(1, "Alice", "Goldenpaw"))));

        let service = OwnerService::new(Arc::new(repo), Arc::new(NullCache::new()));

        let first = service.find_one(1).await.unwrap().unwrap();
        let second = service.find_one(1).await.unwrap().unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn malformed_cache_payload_is_a_miss() {
        let mut cache = MockCacheService::new();
        cache
            .expect_get()
            .times(1)
            .returning(|_| Ok(Some("{not valid json".to_string())));
        cache.expect_set().times(1).returning(|_, _, _| Ok(()));

        let mut repo = MockOwnerRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(owner_record(1, "Alice", "Goldenpaw"))));

        let service = OwnerService::new(Arc::new(repo), Arc::new(cache));

        let result = service.find_one(1).await.unwrap().unwrap();
        assert_eq!(result.id, 1);
    }

    #[tokio::test]
    async fn cache_runtime_errors_never_fail_the_lookup() {
        let mut cache = MockCacheService::new();
        cache
            .expect_get()
            .returning(|_| Err(CacheError::OperationError("connection reset".to_string())));
        cache
            .expect_set()
            .returning(|_, _, _| Err(CacheError::OperationError("connection reset".to_string())));

        let mut repo = MockOwnerRepository::new();
        repo.expect_find_by_last_name()
            .times(1)
            .returning(|_| Ok(vec![owner_record(1, "Alice", "Goldenpaw")]));

        let service = OwnerService::new(Arc::new(repo), Arc::new(cache));

        let owners = service.find_by_name("Goldenpaw", None).await.unwrap();
        assert_eq!(owners.len(), 1);
    }

    #[tokio::test]
    async fn full_lookups_bypass_the_cache() {
        // No expectations on the mock cache: any call would panic.
        let cache = MockCacheService::new();

        let mut repo = MockOwnerRepository::new();
        repo.expect_find_full_by_id().times(1).returning(|_| Ok(None));
        repo.expect_find_full_by_name()
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = OwnerService::new(Arc::new(repo), Arc::new(cache));

        assert!(service.find_full_by_id(1).await.unwrap().is_none());
        assert!(service
            .find_full_by_name("Goldenpaw", Some("Alice"))
            .await
            .unwrap()
            .is_empty());
    }
}
