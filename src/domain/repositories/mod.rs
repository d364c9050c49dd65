//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; concrete implementations live
//! in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! Repositories are the store-of-truth boundary: lookups return domain
//! records with the requested associations included, absent records come
//! back as `None` or an empty list, and any database failure surfaces as
//! [`crate::error::AppError`] unchanged.

pub mod owner_repository;
pub mod pet_repository;

pub use owner_repository::OwnerRepository;
pub use pet_repository::PetRepository;

#[cfg(test)]
pub use owner_repository::MockOwnerRepository;
#[cfg(test)]
pub use pet_repository::MockPetRepository;
