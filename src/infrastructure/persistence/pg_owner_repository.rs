//! PostgreSQL implementation of the owner repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Owner, OwnerFullRecord, OwnerWithPets, PetFullRecord};
use crate::domain::repositories::OwnerRepository;
use crate::error::AppError;

use super::includes;

const OWNER_COLUMNS: &str = "id, first_name, last_name, email, phone, address";

/// PostgreSQL repository for owner lookups.
pub struct PgOwnerRepository {
    pool: Arc<PgPool>,
}

impl PgOwnerRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Attaches the pets include to a set of owner rows.
    async fn with_pets(&self, owners: Vec<Owner>) -> Result<Vec<OwnerWithPets>, AppError> {
        let owner_ids: Vec<i64> = owners.iter().map(|o| o.id).collect();
        let mut pets = includes::pets_by_owner(self.pool.as_ref(), &owner_ids).await?;

        Ok(owners
            .into_iter()
            .map(|owner| {
                let pets = pets.remove(&owner.id).unwrap_or_default();
                OwnerWithPets { owner, pets }
            })
            .collect())
    }

    /// Attaches the full include tree (pets with boosters and visits).
    async fn with_full_pets(&self, owners: Vec<Owner>) -> Result<Vec<OwnerFullRecord>, AppError> {
        let owner_ids: Vec<i64> = owners.iter().map(|o| o.id).collect();
        let mut pets = includes::pets_by_owner(self.pool.as_ref(), &owner_ids).await?;

        let pet_ids: Vec<i64> = pets.values().flatten().map(|p| p.id).collect();
        let mut boosters = includes::boosters_by_pet(self.pool.as_ref(), &pet_ids).await?;
        let mut visits = includes::visits_by_pet(self.pool.as_ref(), &pet_ids).await?;

        Ok(owners
            .into_iter()
            .map(|owner| {
                let pets = pets
                    .remove(&owner.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|pet| PetFullRecord {
                        boosters: boosters.remove(&pet.id).unwrap_or_default(),
                        visits: visits.remove(&pet.id).unwrap_or_default(),
                        owner: owner.clone(),
                        pet,
                    })
                    .collect();
                OwnerFullRecord { owner, pets }
            })
            .collect())
    }
}

#[async_trait]
impl OwnerRepository for PgOwnerRepository {
    async fn find_all(&self) -> Result<Vec<OwnerWithPets>, AppError> {
        let owners: Vec<Owner> =
            sqlx::query_as(&format!("SELECT {} FROM owners ORDER BY id", OWNER_COLUMNS))
                .fetch_all(self.pool.as_ref())
                .await?;

        self.with_pets(owners).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<OwnerWithPets>, AppError> {
        let owner: Option<Owner> =
            sqlx::query_as(&format!("SELECT {} FROM owners WHERE id = $1", OWNER_COLUMNS))
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        let Some(owner) = owner else {
            return Ok(None);
        };

        Ok(self.with_pets(vec![owner]).await?.pop())
    }

    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<OwnerWithPets>, AppError> {
        let owners: Vec<Owner> = sqlx::query_as(&format!(
            "SELECT {} FROM owners WHERE last_name = $1 ORDER BY id",
            OWNER_COLUMNS
        ))
        .bind(last_name)
        .fetch_all(self.pool.as_ref())
        .await?;

        self.with_pets(owners).await
    }

    async fn find_full_by_id(&self, id: i64) -> Result<Option<OwnerFullRecord>, AppError> {
        let owner: Option<Owner> =
            sqlx::query_as(&format!("SELECT {} FROM owners WHERE id = $1", OWNER_COLUMNS))
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        let Some(owner) = owner else {
            return Ok(None);
        };

        Ok(self.with_full_pets(vec![owner]).await?.pop())
    }

    async fn find_full_by_name<'a>(
        &self,
        last_name: &str,
        first_name: Option<&'a str>,
    ) -> Result<Vec<OwnerFullRecord>, AppError> {
        let owners: Vec<Owner> = sqlx::query_as(&format!(
            r#"
            SELECT {}
            FROM owners
            WHERE last_name = $1 AND ($2::text IS NULL OR first_name = $2)
            ORDER BY id
            "#,
            OWNER_COLUMNS
        ))
        .bind(last_name)
        .bind(first_name)
        .fetch_all(self.pool.as_ref())
        .await?;

        self.with_full_pets(owners).await
    }
}
