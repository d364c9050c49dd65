//! Repository trait for owner data access.

use crate::domain::entities::{OwnerFullRecord, OwnerWithPets};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for owner lookups.
///
/// All reads include the pets association; `find_full_*` methods additionally
/// nest each pet's boosters and visit history.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgOwnerRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Lists all owners with their pets.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<OwnerWithPets>, AppError>;

    /// Finds a single owner by id, pets included.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if found
    /// - `Ok(None)` if no owner has this id
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<OwnerWithPets>, AppError>;

    /// Finds all owners with the given last name, pets included.
    ///
    /// First-name narrowing is deliberately not part of this query; callers
    /// filter in-process so one cached list serves every first-name variant.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<OwnerWithPets>, AppError>;

    /// Finds a single owner by id with the fully nested association tree.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_full_by_id(&self, id: i64) -> Result<Option<OwnerFullRecord>, AppError>;

    /// Finds owners by last name (and optionally first name) with the fully
    /// nested association tree.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_full_by_name<'a>(
        &self,
        last_name: &str,
        first_name: Option<&'a str>,
    ) -> Result<Vec<OwnerFullRecord>, AppError>;
}
