//! HTTP request handlers.

pub mod health;
pub mod owners;
pub mod pets;

pub use health::health_handler;
pub use owners::{
    owner_by_id_handler, owner_by_name_handler, owner_full_by_id_handler,
    owner_full_by_name_handler, owner_list_handler,
};
pub use pets::{
    pet_by_id_handler, pet_by_owner_id_handler, pet_by_owner_name_handler,
    pet_full_by_owner_id_handler, pet_full_by_owner_name_handler, pet_list_handler,
};
