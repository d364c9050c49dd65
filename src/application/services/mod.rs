//! Business logic services for the application layer.
//!
//! The services implement the read-through lookup pattern over the
//! repository traits and the cache; see [`OwnerService`] and [`PetService`].

pub mod owner_service;
pub mod pet_service;

pub use owner_service::OwnerService;
pub use pet_service::PetService;

#[cfg(test)]
pub(crate) mod test_support;
