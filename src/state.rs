//! Shared application state injected into all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{OwnerService, PetService};
use crate::infrastructure::cache::CacheService;

/// Application state shared across requests.
///
/// Services and the cache are built once at startup ([`crate::server::run`])
/// and shared read-only; cloning the state clones only the `Arc` handles.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub cache: Arc<dyn CacheService>,
    pub owner_service: Arc<OwnerService>,
    pub pet_service: Arc<PetService>,
}

impl AppState {
    pub fn new(
        db: Arc<PgPool>,
        cache: Arc<dyn CacheService>,
        owner_service: Arc<OwnerService>,
        pet_service: Arc<PetService>,
    ) -> Self {
        Self {
            db,
            cache,
            owner_service,
            pet_service,
        }
    }
}
