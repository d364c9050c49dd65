//! Handlers for pet lookup endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;

use crate::api::dto::pet::PetBasic;
use crate::api::dto::query::NameQuery;
use crate::application::dto::PetFullDto;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all pets.
///
/// # Endpoint
///
/// `GET /api/pets`
///
/// An empty list is a valid response; this endpoint never returns 404.
pub async fn pet_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PetBasic>>, AppError> {
    let pets = state.pet_service.find_all().await?;
    Ok(Json(pets.into_iter().map(PetBasic::from).collect()))
}

/// Rejects non-positive identifiers before they reach the service.
fn validate_id(id: i64, message: &str) -> Result<(), AppError> {
    if id < 1 {
        return Err(AppError::bad_request(message, json!({ "id": id })));
    }
    Ok(())
}

/// Returns a single pet by id.
///
/// # Endpoint
///
/// `GET /api/pets/by-id/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request for a non-positive id.
/// Returns 404 Not Found if no pet has this id.
pub async fn pet_by_id_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PetBasic>, AppError> {
    validate_id(id, "Pet ID must be a positive integer")?;
    match state.pet_service.find_one(id).await? {
        Some(pet) => Ok(Json(PetBasic::from(pet))),
        None => Err(AppError::not_found("Pet not found", json!({ "id": id }))),
    }
}

/// Returns all pets for the given owner id.
///
/// # Endpoint
///
/// `GET /api/pets/by-owner-id/{owner_id}`
///
/// # Errors
///
/// Returns 400 Bad Request for a non-positive owner id.
/// Returns 404 Not Found when the owner has no pets (or does not exist).
pub async fn pet_by_owner_id_handler(
    State(state): State<AppState>,
    Path(owner_id): Path<i64>,
) -> Result<Json<Vec<PetBasic>>, AppError> {
    validate_id(owner_id, "Owner ID must be a positive integer")?;
    let pets = state.pet_service.find_by_owner_id(owner_id).await?;

    if pets.is_empty() {
        return Err(AppError::not_found(
            "No pets found for this owner",
            json!({ "owner_id": owner_id }),
        ));
    }
    Ok(Json(pets.into_iter().map(PetBasic::from).collect()))
}

/// Returns all pets whose owner matches the given last name, optionally
/// narrowed by the owner's first name.
///
/// # Endpoint
///
/// `GET /api/pets/by-owner-name/{last_name}?first_name=...`
///
/// # Errors
///
/// Returns 404 Not Found when no pet matches.
pub async fn pet_by_owner_name_handler(
    State(state): State<AppState>,
    Path(last_name): Path<String>,
    Query(query): Query<NameQuery>,
) -> Result<Json<Vec<PetBasic>>, AppError> {
    let pets = state
        .pet_service
        .find_by_owner_name(&last_name, query.first_name.as_deref())
        .await?;

    if pets.is_empty() {
        return Err(AppError::not_found(
            "No pets found for this owner",
            json!({ "last_name": last_name, "first_name": query.first_name }),
        ));
    }
    Ok(Json(pets.into_iter().map(PetBasic::from).collect()))
}

/// Returns all pets for the given owner id with boosters and visit history.
///
/// # Endpoint
///
/// `GET /api/pets/full/by-owner-id/{owner_id}`
///
/// # Errors
///
/// Returns 400 Bad Request for a non-positive owner id.
/// Returns 404 Not Found when the owner has no pets.
pub async fn pet_full_by_owner_id_handler(
    State(state): State<AppState>,
    Path(owner_id): Path<i64>,
) -> Result<Json<Vec<PetFullDto>>, AppError> {
    validate_id(owner_id, "Owner ID must be a positive integer")?;
    let pets = state.pet_service.find_full_by_owner_id(owner_id).await?;

    if pets.is_empty() {
        return Err(AppError::not_found(
            "No pets found for this owner",
            json!({ "owner_id": owner_id }),
        ));
    }
    Ok(Json(pets))
}

/// Returns all pets by owner name with boosters and visit history.
///
/// # Endpoint
///
/// `GET /api/pets/full/by-owner-name/{last_name}?first_name=...`
///
/// # Errors
///
/// Returns 404 Not Found when no pet matches.
pub async fn pet_full_by_owner_name_handler(
    State(state): State<AppState>,
    Path(last_name): Path<String>,
    Query(query): Query<NameQuery>,
) -> Result<Json<Vec<PetFullDto>>, AppError> {
    let pets = state
        .pet_service
        .find_full_by_owner_name(&last_name, query.first_name.as_deref())
        .await?;

    if pets.is_empty() {
        return Err(AppError::not_found(
            "No pets found for this owner",
            json!({ "last_name": last_name, "first_name": query.first_name }),
        ));
    }
    Ok(Json(pets))
}
