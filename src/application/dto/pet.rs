//! Pet output DTOs and their mapping from domain records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Booster, PetFullRecord, PetWithOwner, Visit};

use super::owner::OwnerBasicDto;

/// Flattened pet shape for list and by-id lookups.
///
/// `owner_first_name` and `owner_last_name` are internal fields: they are
/// part of the cached payload (secondary name filtering happens on them) but
/// must never leave the process boundary. The API layer maps this DTO to
/// [`crate::api::dto::pet::PetBasic`], which exposes only the derived
/// [`owner_full_name`](Self::owner_full_name).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetBasicDto {
    pub id: i64,
    pub name: String,
    pub species: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    pub owner_id: i64,
    pub owner_first_name: String,
    pub owner_last_name: String,
}

impl PetBasicDto {
    /// Maps a pet record with its owner association.
    pub fn from_record(record: PetWithOwner) -> Self {
        Self {
            id: record.pet.id,
            name: record.pet.name,
            species: record.pet.species,
            breed: record.pet.breed,
            owner_id: record.pet.owner_id,
            owner_first_name: record.owner.first_name,
            owner_last_name: record.owner.last_name,
        }
    }

    /// Derived display name: `"First, Last"`.
    pub fn owner_full_name(&self) -> String {
        format!("{}, {}", self.owner_first_name, self.owner_last_name)
    }
}

/// A booster shot in a pet's record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoosterDto {
    pub id: i64,
    pub name: String,
    pub date: DateTime<Utc>,
    pub pet_id: i64,
}

impl From<Booster> for BoosterDto {
    fn from(booster: Booster) -> Self {
        Self {
            id: booster.id,
            name: booster.name,
            date: booster.date,
            pet_id: booster.pet_id,
        }
    }
}

/// A checkup visit in a pet's record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitDto {
    pub id: i64,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<Visit> for VisitDto {
    fn from(visit: Visit) -> Self {
        Self {
            id: visit.id,
            date: visit.date,
            notes: visit.notes,
        }
    }
}

/// Full pet shape with boosters, visit history, and the owner nested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetFullDto {
    pub id: i64,
    pub name: String,
    pub species: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<DateTime<Utc>>,
    pub vaccinated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vaccination_date: Option<DateTime<Utc>>,
    pub boosters: Vec<BoosterDto>,
    pub visits: Vec<VisitDto>,
    pub owner: OwnerBasicDto,
}

impl PetFullDto {
    pub fn from_record(record: PetFullRecord) -> Self {
        Self {
            id: record.pet.id,
            name: record.pet.name,
            species: record.pet.species,
            breed: record.pet.breed,
            birth_date: record.pet.birth_date,
            vaccinated: record.pet.vaccinated,
            vaccination_date: record.pet.vaccination_date,
            boosters: record.boosters.into_iter().map(BoosterDto::from).collect(),
            visits: record.visits.into_iter().map(VisitDto::from).collect(),
            owner: OwnerBasicDto::from_owner_only(record.owner),
        }
    }
}
