//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using the SQLx
//! runtime query API. Association trees ("includes") are assembled from
//! batched follow-up queries in [`includes`].
//!
//! # Repositories
//!
//! - [`PgOwnerRepository`] - owner lookups with pets included
//! - [`PgPetRepository`] - pet lookups with owner included

mod includes;
pub mod pg_owner_repository;
pub mod pg_pet_repository;

pub use pg_owner_repository::PgOwnerRepository;
pub use pg_pet_repository::PgPetRepository;
