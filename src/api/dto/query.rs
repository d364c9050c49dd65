//! Shared query parameter shapes.

use serde::Deserialize;

/// Optional first-name narrowing for by-name lookups.
#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub first_name: Option<String>,
}
