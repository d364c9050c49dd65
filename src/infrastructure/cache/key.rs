//! Cache key derivation.
//!
//! Every cache entry is addressed by a key derived from a [`CacheDomain`]
//! (the entity-type namespace) and a [`CacheSelector`] (the lookup value).
//! Derivation is a pure function: the same (domain, selector) pair always
//! yields the same key, and each selector family carries a distinct infix so
//! keys from different families never collide within a domain.

use std::fmt;

/// Entity-type namespace for cache keys.
///
/// A closed set: lookups outside these domains are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheDomain {
    Owners,
    Pets,
}

impl CacheDomain {
    /// Stable lowercase token used as the key prefix.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owners => "owners",
            Self::Pets => "pets",
        }
    }
}

/// Lookup value combined with a domain to form a cache key.
///
/// Segments are joined with `:`; selector values must not contain the
/// delimiter (identifiers are numeric, names come from the `last_name` /
/// `first_name` columns).
#[derive(Debug, Clone, Copy)]
pub enum CacheSelector<'a> {
    /// Primary-key lookup.
    Id(i64),
    /// Name lookup: a pure last-name selector, or last name + first name.
    Name {
        last: &'a str,
        first: Option<&'a str>,
    },
    /// Lookup of records belonging to an owner, by owner id.
    OwnerId(i64),
    /// Lookup of records belonging to an owner, by owner last name.
    OwnerName(&'a str),
}

/// An opaque, deterministic cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derives the key for a (domain, selector) pair.
    ///
    /// Key shapes:
    ///
    /// - `owners:{id}` / `pets:{id}`
    /// - `owners:name:{last}` / `owners:name:{last}:{first}`
    /// - `pets:owner:{owner_id}`
    /// - `pets:owner-name:{last}`
    pub fn new(domain: CacheDomain, selector: CacheSelector<'_>) -> Self {
        let domain = domain.as_str();
        let key = match selector {
            CacheSelector::Id(id) => format!("{}:{}", domain, id),
            CacheSelector::Name { last, first: None } => format!("{}:name:{}", domain, last),
            CacheSelector::Name {
                last,
                first: Some(first),
            } => format!("{}:name:{}:{}", domain, last, first),
            CacheSelector::OwnerId(owner_id) => format!("{}:owner:{}", domain, owner_id),
            CacheSelector::OwnerName(last) => format!("{}:owner-name:{}", domain, last),
        };
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
