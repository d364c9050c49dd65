//! Owner output DTOs and their mapping from domain records.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Owner, OwnerFullRecord, OwnerWithPets};

use super::pet::PetFullDto;

/// Flattened owner shape for list and by-id lookups.
///
/// `pet_count` and `pet_ids` are derived from the pets association at
/// mapping time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerBasicDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub pet_count: usize,
    pub pet_ids: Vec<i64>,
}

impl OwnerBasicDto {
    /// Maps an owner record with its pets association.
    pub fn from_record(record: OwnerWithPets) -> Self {
        let pet_ids: Vec<i64> = record.pets.iter().map(|p| p.id).collect();
        Self {
            id: record.owner.id,
            first_name: record.owner.first_name,
            last_name: record.owner.last_name,
            email: record.owner.email,
            phone: record.owner.phone,
            pet_count: pet_ids.len(),
            pet_ids,
        }
    }

    /// Maps a bare owner row with no pets association loaded.
    ///
    /// Used for the owner nested inside [`PetFullDto`], where the source
    /// query does not include the owner's pets; `pet_count`/`pet_ids` are
    /// empty there.
    pub fn from_owner_only(owner: Owner) -> Self {
        Self {
            id: owner.id,
            first_name: owner.first_name,
            last_name: owner.last_name,
            email: owner.email,
            phone: owner.phone,
            pet_count: 0,
            pet_ids: Vec::new(),
        }
    }
}

/// Full owner shape with every pet nested as [`PetFullDto`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerFullDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub pets: Vec<PetFullDto>,
}

impl OwnerFullDto {
    pub fn from_record(record: OwnerFullRecord) -> Self {
        Self {
            id: record.owner.id,
            first_name: record.owner.first_name,
            last_name: record.owner.last_name,
            email: record.owner.email,
            phone: record.owner.phone,
            address: record.owner.address,
            pets: record.pets.into_iter().map(PetFullDto::from_record).collect(),
        }
    }
}
