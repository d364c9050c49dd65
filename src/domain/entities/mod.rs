//! Core domain entities representing the business data model.
//!
//! Entities mirror the persistent schema: an [`Owner`] has many [`Pet`]s,
//! and each pet carries its [`Booster`] shots and checkup [`Visit`] history.
//! Aggregate records (`*With*` / `*Full*`) bundle a row with the associations
//! a lookup requested, the way the persistence layer returns them.

pub mod owner;
pub mod pet;

pub use owner::{Owner, OwnerFullRecord, OwnerWithPets};
pub use pet::{Booster, Pet, PetFullRecord, PetWithOwner, Visit};
