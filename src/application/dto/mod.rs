//! Output DTOs produced by the services.
//!
//! These are the externally-shaped records: flattened from domain records,
//! with derived fields computed at mapping time. They are also exactly what
//! the cache stores; the services always map before caching, so a cached
//! entry round-trips through serde back into the same DTO shape.

pub mod owner;
pub mod pet;

pub use owner::{OwnerBasicDto, OwnerFullDto};
pub use pet::{BoosterDto, PetBasicDto, PetFullDto, VisitDto};
