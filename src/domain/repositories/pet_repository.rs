//! Repository trait for pet data access.

use crate::domain::entities::{PetFullRecord, PetWithOwner};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for pet lookups.
///
/// All reads include the owner association; `find_full_*` methods
/// additionally nest each pet's boosters and visit history.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPetRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Lists all pets with their owners.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<PetWithOwner>, AppError>;

    /// Finds a single pet by id, owner included.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if found
    /// - `Ok(None)` if no pet has this id
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<PetWithOwner>, AppError>;

    /// Finds all pets belonging to the given owner id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_owner_id(&self, owner_id: i64) -> Result<Vec<PetWithOwner>, AppError>;

    /// Finds all pets whose owner has the given last name.
    ///
    /// First-name narrowing is deliberately not part of this query; callers
    /// filter in-process so one cached list serves every first-name variant.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_owner_last_name(&self, last_name: &str)
        -> Result<Vec<PetWithOwner>, AppError>;

    /// Finds all pets for an owner id with the fully nested association tree.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_full_by_owner_id(&self, owner_id: i64) -> Result<Vec<PetFullRecord>, AppError>;

    /// Finds all pets by owner last name (and optionally first name) with the
    /// fully nested association tree.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_full_by_owner_name<'a>(
        &self,
        last_name: &str,
        first_name: Option<&'a str>,
    ) -> Result<Vec<PetFullRecord>, AppError>;
}
