//! Key namespace owned by the authentication subsystem

use crate::domain::DomainError;

/// Marker embedded in every key the authentication client writes
pub const AUTH_CACHE_MARKER: &str = "@@auth0spajs@@";

/// Partition of a shared key-space identified by a marker substring
///
/// A key belongs to the namespace iff it contains the marker anywhere,
/// not only as a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyNamespace {
    marker: String,
}

impl Default for KeyNamespace {
    fn default() -> Self {
        Self {
            marker: AUTH_CACHE_MARKER.to_string(),
        }
    }
}

impl KeyNamespace {
    /// Creates a namespace for the given marker
    ///
    /// An empty marker would claim every key in the store and is rejected.
    pub fn new(marker: impl Into<String>) -> Result<Self, DomainError> {
        let marker = marker.into();

        if marker.is_empty() {
            return Err(DomainError::configuration(
                "Cache key marker cannot be empty",
            ));
        }

        Ok(Self { marker })
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Ownership test used by every enumerating or destructive operation
    pub fn owns(&self, key: &str) -> bool {
        key.contains(&self.marker)
    }

    /// Keeps only the keys owned by this namespace
    pub fn retain_owned(&self, mut keys: Vec<String>) -> Vec<String> {
        keys.retain(|key| self.owns(key));
        keys
    }
}
