//! Owner entity and its aggregate records.

use super::pet::{Pet, PetFullRecord};

/// A pet owner as stored in the `owners` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Owner {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// An owner row together with its pets, as returned by lookups that include
/// the pets association.
#[derive(Debug, Clone)]
pub struct OwnerWithPets {
    pub owner: Owner,
    pub pets: Vec<Pet>,
}

/// An owner with the fully nested association tree: every pet carries its
/// boosters and visit history.
#[derive(Debug, Clone)]
pub struct OwnerFullRecord {
    pub owner: Owner,
    pub pets: Vec<PetFullRecord>,
}
