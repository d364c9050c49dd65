//! Batched loading of association trees.
//!
//! Each helper issues one query for a whole id set and groups the rows by
//! parent id, so a lookup loads its includes in a fixed number of queries
//! regardless of result size.

use std::collections::HashMap;

use sqlx::PgPool;

use crate::domain::entities::{Booster, Pet, Visit};
use crate::error::AppError;

/// Loads all pets for the given owner ids, grouped by owner id.
pub(super) async fn pets_by_owner(
    pool: &PgPool,
    owner_ids: &[i64],
) -> Result<HashMap<i64, Vec<Pet>>, AppError> {
    if owner_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let pets: Vec<Pet> = sqlx::query_as(
        r#"
        SELECT id, name, species, breed, birth_date, vaccinated, vaccination_date, owner_id
        FROM pets
        WHERE owner_id = ANY($1)
        ORDER BY id
        "#,
    )
    .bind(owner_ids)
    .fetch_all(pool)
    .await?;

    let mut grouped: HashMap<i64, Vec<Pet>> = HashMap::new();
    for pet in pets {
        grouped.entry(pet.owner_id).or_default().push(pet);
    }
    Ok(grouped)
}

/// Loads all boosters for the given pet ids, grouped by pet id.
pub(super) async fn boosters_by_pet(
    pool: &PgPool,
    pet_ids: &[i64],
) -> Result<HashMap<i64, Vec<Booster>>, AppError> {
    if pet_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let boosters: Vec<Booster> = sqlx::query_as(
        r#"
        SELECT id, name, date, pet_id
        FROM boosters
        WHERE pet_id = ANY($1)
        ORDER BY date, id
        "#,
    )
    .bind(pet_ids)
    .fetch_all(pool)
    .await?;

    let mut grouped: HashMap<i64, Vec<Booster>> = HashMap::new();
    for booster in boosters {
        grouped.entry(booster.pet_id).or_default().push(booster);
    }
    Ok(grouped)
}

/// Loads all visits for the given pet ids, grouped by pet id.
pub(super) async fn visits_by_pet(
    pool: &PgPool,
    pet_ids: &[i64],
) -> Result<HashMap<i64, Vec<Visit>>, AppError> {
    if pet_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let visits: Vec<Visit> = sqlx::query_as(
        r#"
        SELECT id, pet_id, date, notes
        FROM visits
        WHERE pet_id = ANY($1)
        ORDER BY date, id
        "#,
    )
    .bind(pet_ids)
    .fetch_all(pool)
    .await?;

    let mut grouped: HashMap<i64, Vec<Visit>> = HashMap::new();
    for visit in visits {
        grouped.entry(visit.pet_id).or_default().push(visit);
    }
    Ok(grouped)
}
