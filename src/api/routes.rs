//! API route configuration.

use crate::api::handlers::{
    owner_by_id_handler, owner_by_name_handler, owner_full_by_id_handler,
    owner_full_by_name_handler, owner_list_handler, pet_by_id_handler, pet_by_owner_id_handler,
    pet_by_owner_name_handler, pet_full_by_owner_id_handler, pet_full_by_owner_name_handler,
    pet_list_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes.
///
/// # Endpoints
///
/// - `GET /owners`                              - List all owners
/// - `GET /owners/by-id/{id}`                   - Owner by id
/// - `GET /owners/by-name/{last_name}`          - Owners by last name (`?first_name=` narrows)
/// - `GET /owners/full/by-id/{id}`              - Owner with fully nested pets
/// - `GET /owners/full/by-name/{last_name}`     - Owners with fully nested pets
/// - `GET /pets`                                - List all pets
/// - `GET /pets/by-id/{id}`                     - Pet by id
/// - `GET /pets/by-owner-id/{owner_id}`         - Pets for an owner id
/// - `GET /pets/by-owner-name/{last_name}`      - Pets by owner last name (`?first_name=` narrows)
/// - `GET /pets/full/by-owner-id/{owner_id}`    - Pets with boosters and visit history
/// - `GET /pets/full/by-owner-name/{last_name}` - Pets with boosters and visit history
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/owners", get(owner_list_handler))
        .route("/owners/by-id/{id}", get(owner_by_id_handler))
        .route("/owners/by-name/{last_name}", get(owner_by_name_handler))
        .route("/owners/full/by-id/{id}", get(owner_full_by_id_handler))
        .route(
            "/owners/full/by-name/{last_name}",
            get(owner_full_by_name_handler),
        )
        .route("/pets", get(pet_list_handler))
        .route("/pets/by-id/{id}", get(pet_by_id_handler))
        .route("/pets/by-owner-id/{owner_id}", get(pet_by_owner_id_handler))
        .route(
            "/pets/by-owner-name/{last_name}",
            get(pet_by_owner_name_handler),
        )
        .route(
            "/pets/full/by-owner-id/{owner_id}",
            get(pet_full_by_owner_id_handler),
        )
        .route(
            "/pets/full/by-owner-name/{last_name}",
            get(pet_full_by_owner_name_handler),
        )
}
