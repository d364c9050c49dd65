//! Infrastructure layer: database repositories and the cache.

pub mod cache;
pub mod persistence;
