//! Pet entity and its aggregate records.

use chrono::{DateTime, Utc};

use super::owner::Owner;

/// A pet as stored in the `pets` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub birth_date: Option<DateTime<Utc>>,
    pub vaccinated: bool,
    pub vaccination_date: Option<DateTime<Utc>>,
    pub owner_id: i64,
}

/// A booster shot administered to a pet.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Booster {
    pub id: i64,
    pub name: String,
    pub date: DateTime<Utc>,
    pub pet_id: i64,
}

/// A checkup visit in a pet's history.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Visit {
    pub id: i64,
    pub pet_id: i64,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
}

/// A pet row together with its owner, as returned by lookups that include
/// the owner association.
#[derive(Debug, Clone)]
pub struct PetWithOwner {
    pub pet: Pet,
    pub owner: Owner,
}

/// A pet with the fully nested association tree: owner, boosters, and
/// visit history.
#[derive(Debug, Clone)]
pub struct PetFullRecord {
    pub pet: Pet,
    pub owner: Owner,
    pub boosters: Vec<Booster>,
    pub visits: Vec<Visit>,
}
