//! PostgreSQL implementation of the pet repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Owner, Pet, PetFullRecord, PetWithOwner};
use crate::domain::repositories::PetRepository;
use crate::error::AppError;

use super::includes;

const PET_OWNER_COLUMNS: &str = r#"
    p.id, p.name, p.species, p.breed, p.birth_date, p.vaccinated, p.vaccination_date, p.owner_id,
    o.first_name AS owner_first_name, o.last_name AS owner_last_name,
    o.email AS owner_email, o.phone AS owner_phone, o.address AS owner_address
"#;

/// Flat row produced by the pets-join-owners queries.
#[derive(sqlx::FromRow)]
struct PetOwnerRow {
    id: i64,
    name: String,
    species: String,
    breed: Option<String>,
    birth_date: Option<chrono::DateTime<chrono::Utc>>,
    vaccinated: bool,
    vaccination_date: Option<chrono::DateTime<chrono::Utc>>,
    owner_id: i64,
    owner_first_name: String,
    owner_last_name: String,
    owner_email: String,
    owner_phone: Option<String>,
    owner_address: Option<String>,
}

impl PetOwnerRow {
    fn into_record(self) -> PetWithOwner {
        PetWithOwner {
            pet: Pet {
                id: self.id,
                name: self.name,
                species: self.species,
                breed: self.breed,
                birth_date: self.birth_date,
                vaccinated: self.vaccinated,
                vaccination_date: self.vaccination_date,
                owner_id: self.owner_id,
            },
            owner: Owner {
                id: self.owner_id,
                first_name: self.owner_first_name,
                last_name: self.owner_last_name,
                email: self.owner_email,
                phone: self.owner_phone,
                address: self.owner_address,
            },
        }
    }
}

/// PostgreSQL repository for pet lookups.
pub struct PgPetRepository {
    pool: Arc<PgPool>,
}

impl PgPetRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Attaches boosters and visits to pet-with-owner records.
    async fn with_history(
        &self,
        records: Vec<PetWithOwner>,
    ) -> Result<Vec<PetFullRecord>, AppError> {
        let pet_ids: Vec<i64> = records.iter().map(|r| r.pet.id).collect();
        let mut boosters = includes::boosters_by_pet(self.pool.as_ref(), &pet_ids).await?;
        let mut visits = includes::visits_by_pet(self.pool.as_ref(), &pet_ids).await?;

        Ok(records
            .into_iter()
            .map(|record| PetFullRecord {
                boosters: boosters.remove(&record.pet.id).unwrap_or_default(),
                visits: visits.remove(&record.pet.id).unwrap_or_default(),
                pet: record.pet,
                owner: record.owner,
            })
            .collect())
    }
}

#[async_trait]
impl PetRepository for PgPetRepository {
    async fn find_all(&self) -> Result<Vec<PetWithOwner>, AppError> {
        let rows: Vec<PetOwnerRow> = sqlx::query_as(&format!(
            "SELECT {} FROM pets p JOIN owners o ON o.id = p.owner_id ORDER BY p.id",
            PET_OWNER_COLUMNS
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(PetOwnerRow::into_record).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<PetWithOwner>, AppError> {
        let row: Option<PetOwnerRow> = sqlx::query_as(&format!(
            "SELECT {} FROM pets p JOIN owners o ON o.id = p.owner_id WHERE p.id = $1",
            PET_OWNER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(PetOwnerRow::into_record))
    }

    async fn find_by_owner_id(&self, owner_id: i64) -> Result<Vec<PetWithOwner>, AppError> {
        let rows: Vec<PetOwnerRow> = sqlx::query_as(&format!(
            r#"
            SELECT {}
            FROM pets p
            JOIN owners o ON o.id = p.owner_id
            WHERE p.owner_id = $1
            ORDER BY p.id
            "#,
            PET_OWNER_COLUMNS
        ))
        .bind(owner_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(PetOwnerRow::into_record).collect())
    }

    async fn find_by_owner_last_name(
        &self,
        last_name: &str,
    ) -> Result<Vec<PetWithOwner>, AppError> {
        let rows: Vec<PetOwnerRow> = sqlx::query_as(&format!(
            r#"
            SELECT {}
            FROM pets p
            JOIN owners o ON o.id = p.owner_id
            WHERE o.last_name = $1
            ORDER BY p.id
            "#,
            PET_OWNER_COLUMNS
        ))
        .bind(last_name)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(PetOwnerRow::into_record).collect())
    }

    async fn find_full_by_owner_id(&self, owner_id: i64) -> Result<Vec<PetFullRecord>, AppError> {
        let records = self.find_by_owner_id(owner_id).await?;
        self.with_history(records).await
    }

    async fn find_full_by_owner_name<'a>(
        &self,
        last_name: &str,
        first_name: Option<&'a str>,
    ) -> Result<Vec<PetFullRecord>, AppError> {
        let rows: Vec<PetOwnerRow> = sqlx::query_as(&format!(
            r#"
            SELECT {}
            FROM pets p
            JOIN owners o ON o.id = p.owner_id
            WHERE o.last_name = $1 AND ($2::text IS NULL OR o.first_name = $2)
            ORDER BY p.id
            "#,
            PET_OWNER_COLUMNS
        ))
        .bind(last_name)
        .bind(first_name)
        .fetch_all(self.pool.as_ref())
        .await?;

        let records: Vec<PetWithOwner> =
            rows.into_iter().map(PetOwnerRow::into_record).collect();
        self.with_history(records).await
    }
}
