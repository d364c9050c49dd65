//! Handlers for owner lookup endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;

use crate::api::dto::query::NameQuery;
use crate::application::dto::{OwnerBasicDto, OwnerFullDto};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all owners.
///
/// # Endpoint
///
/// `GET /api/owners`
///
/// An empty list is a valid response; this endpoint never returns 404.
pub async fn owner_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<OwnerBasicDto>>, AppError> {
    let owners = state.owner_service.find_all().await?;
    Ok(Json(owners))
}

/// Rejects non-positive identifiers before they reach the service.
fn validate_id(id: i64) -> Result<(), AppError> {
    if id < 1 {
        return Err(AppError::bad_request(
            "Owner ID must be a positive integer",
            json!({ "id": id }),
        ));
    }
    Ok(())
}

/// Returns a single owner by id.
///
/// # Endpoint
///
/// `GET /api/owners/by-id/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request for a non-positive id.
/// Returns 404 Not Found if no owner has this id.
pub async fn owner_by_id_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<OwnerBasicDto>, AppError> {
    validate_id(id)?;
    match state.owner_service.find_one(id).await? {
        Some(owner) => Ok(Json(owner)),
        None => Err(AppError::not_found("Owner not found", json!({ "id": id }))),
    }
}

/// Returns owners by last name, optionally narrowed by first name.
///
/// # Endpoint
///
/// `GET /api/owners/by-name/{last_name}?first_name=...`
///
/// # Errors
///
/// Returns 404 Not Found when no owner matches; zero matches are
/// distinguished from a successful listing at this boundary.
pub async fn owner_by_name_handler(
    State(state): State<AppState>,
    Path(last_name): Path<String>,
    Query(query): Query<NameQuery>,
) -> Result<Json<Vec<OwnerBasicDto>>, AppError> {
    let owners = state
        .owner_service
        .find_by_name(&last_name, query.first_name.as_deref())
        .await?;

    if owners.is_empty() {
        return Err(AppError::not_found(
            "No owners found",
            json!({ "last_name": last_name, "first_name": query.first_name }),
        ));
    }
    Ok(Json(owners))
}

/// Returns a single owner by id with all pets fully nested.
///
/// # Endpoint
///
/// `GET /api/owners/full/by-id/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request for a non-positive id.
/// Returns 404 Not Found if no owner has this id.
pub async fn owner_full_by_id_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<OwnerFullDto>, AppError> {
    validate_id(id)?;
    match state.owner_service.find_full_by_id(id).await? {
        Some(owner) => Ok(Json(owner)),
        None => Err(AppError::not_found("Owner not found", json!({ "id": id }))),
    }
}

/// Returns owners by name with all pets fully nested.
///
/// # Endpoint
///
/// `GET /api/owners/full/by-name/{last_name}?first_name=...`
///
/// # Errors
///
/// Returns 404 Not Found when no owner matches.
pub async fn owner_full_by_name_handler(
    State(state): State<AppState>,
    Path(last_name): Path<String>,
    Query(query): Query<NameQuery>,
) -> Result<Json<Vec<OwnerFullDto>>, AppError> {
    let owners = state
        .owner_service
        .find_full_by_name(&last_name, query.first_name.as_deref())
        .await?;

    if owners.is_empty() {
        return Err(AppError::not_found(
            "No owners found",
            json!({ "last_name": last_name, "first_name": query.first_name }),
        ));
    }
    Ok(Json(owners))
}
