//! Synchronous key-value store trait

use std::fmt::Debug;

use crate::domain::DomainError;

/// Synchronous, origin-scoped key-value store holding text values
///
/// The store is assumed to be owned exclusively by one application origin,
/// so `clear` and `keys` cover the whole store.
pub trait KeyValueStore: Send + Sync + Debug {
    /// Returns the text stored under `key`, if any
    fn get_item(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Writes `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<(), DomainError>;

    /// Deletes `key` if present
    fn remove_item(&self, key: &str) -> Result<(), DomainError>;

    /// Deletes every entry
    fn clear(&self) -> Result<(), DomainError>;

    /// Lists every key in the store's iteration order
    fn keys(&self) -> Result<Vec<String>, DomainError>;
}
