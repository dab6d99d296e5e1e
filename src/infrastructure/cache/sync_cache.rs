//! Cache adapter over a synchronous key-value store

use std::sync::Arc;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::domain::cache::{codec, Cache, Completion};
use crate::domain::storage::KeyValueStore;
use crate::domain::DomainError;

/// Cache adapter for the browser-local store
///
/// Adds no semantics beyond the value codec. `clear` and `all_keys` are
/// unscoped because the store belongs to a single origin.
#[derive(Debug, Clone)]
pub struct SyncKeyValueCache {
    store: Arc<dyn KeyValueStore>,
}

impl SyncKeyValueCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Reads and decodes the value under `key`
    pub fn get<V>(&self, key: &str) -> Result<Option<V>, DomainError>
    where
        V: DeserializeOwned,
    {
        match self.store.get_item(key)? {
            Some(data) => Ok(Some(codec::decode(key, &data)?)),
            None => Ok(None),
        }
    }

    /// Encodes and writes `value` under `key`
    pub fn set<V>(&self, key: &str, value: &V) -> Result<(), DomainError>
    where
        V: Serialize + ?Sized,
    {
        let data = codec::encode(value)?;
        self.store.set_item(key, &data)
    }

    pub fn remove(&self, key: &str) -> Result<(), DomainError> {
        self.store.remove_item(key)
    }

    /// Deletes every entry in the store
    pub fn clear(&self) -> Result<(), DomainError> {
        self.store.clear()
    }

    /// Every key in the store
    pub fn all_keys(&self) -> Result<Vec<String>, DomainError> {
        self.store.keys()
    }
}

#[async_trait]
impl Cache for SyncKeyValueCache {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.store.get_item(key)
    }

    async fn set_raw(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.store.set_item(key, value)
    }

    async fn remove(&self, key: &str) -> Result<(), DomainError> {
        self.store.remove_item(key)
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.store.clear()
    }

    async fn all_keys(&self) -> Result<Vec<String>, DomainError> {
        self.store.keys()
    }

    fn completion(&self) -> Completion {
        Completion::Immediate
    }
}
