//! Pet lookup service with read-through caching.

use std::sync::Arc;

use tracing::debug;

use crate::application::dto::{PetBasicDto, PetFullDto};
use crate::domain::repositories::PetRepository;
use crate::error::AppError;
use crate::infrastructure::cache::{CacheDomain, CacheKey, CacheSelector, CacheService};

/// Service for pet lookups.
///
/// Same read-through pattern as [`crate::application::services::OwnerService`]:
/// basic lookups check the cache by derived key and populate it on a miss;
/// owner-name lookups cache by last name only and narrow in-process; full
/// lookups go straight to the repository.
pub struct PetService {
    repository: Arc<dyn PetRepository>,
    cache: Arc<dyn CacheService>,
}

impl PetService {
    pub fn new(repository: Arc<dyn PetRepository>, cache: Arc<dyn CacheService>) -> Self {
        Self { repository, cache }
    }

    /// Lists all pets. Not cached.
    pub async fn find_all(&self) -> Result<Vec<PetBasicDto>, AppError> {
        debug!("Fetching all pets (no cache)");
        let records = self.repository.find_all().await?;
        Ok(records.into_iter().map(PetBasicDto::from_record).collect())
    }

    /// Finds one pet by id, read-through cached under `pets:{id}`.
    ///
    /// Returns `Ok(None)` when no pet has this id; a miss on an absent id
    /// creates no cache entry.
    pub async fn find_one(&self, id: i64) -> Result<Option<PetBasicDto>, AppError> {
        debug!("Fetching pet with id {}", id);
        let key = CacheKey::new(CacheDomain::Pets, CacheSelector::Id(id));

        if let Some(cached) = self.cache.get_list::<PetBasicDto>(&key).await {
            if let Some(dto) = cached.into_first() {
                debug!("Pet {} served from cache", id);
                return Ok(Some(dto));
            }
        }

        let Some(record) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };

        let dto = PetBasicDto::from_record(record);
        self.cache
            .put_list(&key, std::slice::from_ref(&dto), None)
            .await;
        Ok(Some(dto))
    }

    /// Finds all pets for an owner id, read-through cached under
    /// `pets:owner:{owner_id}`.
    pub async fn find_by_owner_id(&self, owner_id: i64) -> Result<Vec<PetBasicDto>, AppError> {
        debug!("Fetching pets for owner_id={}", owner_id);
        let key = CacheKey::new(CacheDomain::Pets, CacheSelector::OwnerId(owner_id));

        if let Some(cached) = self.cache.get_list::<PetBasicDto>(&key).await {
            debug!("Pets for owner {} served from cache", owner_id);
            return Ok(cached.into_inner());
        }

        let records = self.repository.find_by_owner_id(owner_id).await?;
        let mapped: Vec<PetBasicDto> =
            records.into_iter().map(PetBasicDto::from_record).collect();
        self.cache.put_list(&key, &mapped, None).await;
        Ok(mapped)
    }

    /// Finds all pets whose owner matches the given last name, optionally
    /// narrowed by the owner's first name.
    ///
    /// The cache key carries the last name only (`pets:owner-name:{last}`);
    /// narrowing is an in-process exact match on the cached record's
    /// owner-first-name field. A hit short-circuits the repository even when
    /// the narrowed result is empty.
    pub async fn find_by_owner_name(
        &self,
        last_name: &str,
        first_name: Option<&str>,
    ) -> Result<Vec<PetBasicDto>, AppError> {
        debug!(
            "Fetching pets for owner last_name={}, first_name={:?}",
            last_name, first_name
        );
        let key = CacheKey::new(CacheDomain::Pets, CacheSelector::OwnerName(last_name));

        if let Some(cached) = self.cache.get_list::<PetBasicDto>(&key).await {
            debug!("Pets for owner name {} served from cache", last_name);
            return Ok(filter_by_owner_first_name(cached.into_inner(), first_name));
        }

        let records = self.repository.find_by_owner_last_name(last_name).await?;
        let mapped: Vec<PetBasicDto> =
            records.into_iter().map(PetBasicDto::from_record).collect();
        self.cache.put_list(&key, &mapped, None).await;

        Ok(filter_by_owner_first_name(mapped, first_name))
    }

    /// Finds all pets for an owner id with the full association tree.
    /// Not cached.
    pub async fn find_full_by_owner_id(
        &self,
        owner_id: i64,
    ) -> Result<Vec<PetFullDto>, AppError> {
        debug!("Fetching full pets for owner_id={}", owner_id);
        let records = self.repository.find_full_by_owner_id(owner_id).await?;
        Ok(records.into_iter().map(PetFullDto::from_record).collect())
    }

    /// Finds all pets by owner name with the full association tree.
    /// Not cached.
    pub async fn find_full_by_owner_name(
        &self,
        last_name: &str,
        first_name: Option<&str>,
    ) -> Result<Vec<PetFullDto>, AppError> {
        debug!(
            "Fetching full pets for owner last_name={}, first_name={:?}",
            last_name, first_name
        );
        let records = self
            .repository
            .find_full_by_owner_name(last_name, first_name)
            .await?;
        Ok(records.into_iter().map(PetFullDto::from_record).collect())
    }
}

fn filter_by_owner_first_name(
    pets: Vec<PetBasicDto>,
    first_name: Option<&str>,
) -> Vec<PetBasicDto> {
    match first_name {
        Some(first) => pets
            .into_iter()
            .filter(|p| p.owner_first_name == first)
            .collect(),
        None => pets,
    }
}
