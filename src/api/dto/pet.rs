//! Pet response shapes.

use serde::Serialize;

use crate::application::dto::PetBasicDto;

/// Pet shape serialized in API responses.
///
/// The cached [`PetBasicDto`] carries the owner's first and last name as
/// internal fields for in-process filtering; only the derived
/// `owner_full_name` crosses the process boundary.
#[derive(Debug, Serialize)]
pub struct PetBasic {
    pub id: i64,
    pub name: String,
    pub species: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    pub owner_id: i64,
    pub owner_full_name: String,
}

impl From<PetBasicDto> for PetBasic {
    fn from(dto: PetBasicDto) -> Self {
        let owner_full_name = dto.owner_full_name();
        Self {
            id: dto.id,
            name: dto.name,
            species: dto.species,
            breed: dto.breed,
            owner_id: dto.owner_id,
            owner_full_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_owner_name_fields_do_not_serialize() {
        let dto = PetBasicDto {
            id: 1,
            name: "Fluffy".to_string(),
            species: "Cat".to_string(),
            breed: None,
            owner_id: 42,
            owner_first_name: "Alice".to_string(),
            owner_last_name: "Goldenpaw".to_string(),
        };

        let json = serde_json::to_value(PetBasic::from(dto)).unwrap();
        assert_eq!(json["owner_full_name"], "Alice, Goldenpaw");
        assert!(json.get("owner_first_name").is_none());
        assert!(json.get("owner_last_name").is_none());
    }
}
