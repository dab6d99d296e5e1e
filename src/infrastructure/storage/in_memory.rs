//! In-memory key-value stores

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::storage::{KeyValueBridge, KeyValueStore};
use crate::domain::DomainError;

fn entry_size(key: &str, value: &str) -> usize {
    key.len() + value.len()
}

/// Synchronous origin-scoped store, the browser-local storage model
///
/// An optional quota bounds the total bytes of keys plus values; writes past
/// it fail with `QuotaExceeded` and leave the store unchanged.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl InMemoryKeyValueStore {
    /// Creates a new empty store without quota
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store limited to `quota_bytes`
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Bytes currently used by keys and values
    pub fn used_bytes(&self) -> Result<usize, DomainError> {
        let entries = self.entries.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(entries.iter().map(|(k, v)| entry_size(k, v)).sum())
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, DomainError> {
        let entries = self.entries.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(entries.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let mut entries = self.entries.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if let Some(quota) = self.quota_bytes {
            let used: usize = entries.iter().map(|(k, v)| entry_size(k, v)).sum();
            let replaced = entries.get(key).map(|v| entry_size(key, v)).unwrap_or(0);
            let requested = used - replaced + entry_size(key, value);

            if requested > quota {
                return Err(DomainError::quota_exceeded(requested, quota));
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), DomainError> {
        let mut entries = self.entries.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        entries.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), DomainError> {
        let mut entries = self.entries.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        entries.clear();
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, DomainError> {
        let entries = self.entries.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(entries.keys().cloned().collect())
    }
}

/// Asynchronous bridge over a shared in-process map
///
/// Clones share the same map, so a test can hold one handle while the cache
/// holds another. Data is lost when the process terminates.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBridge {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryBridge {
    /// Creates a new empty bridge
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bridge pre-populated with entries, e.g. foreign app data
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        Self {
            entries: Arc::new(RwLock::new(map)),
        }
    }

    /// Copy of the current contents
    pub fn snapshot(&self) -> Result<HashMap<String, String>, DomainError> {
        let entries = self.entries.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(entries.clone())
    }
}

#[async_trait]
impl KeyValueBridge for InMemoryBridge {
    async fn get_item(&self, key: &str) -> Result<Option<String>, DomainError> {
        let entries = self.entries.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(entries.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let mut entries = self.entries.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), DomainError> {
        let mut entries = self.entries.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        entries.remove(key);
        Ok(())
    }

    async fn get_all_keys(&self) -> Result<Vec<String>, DomainError> {
        let entries = self.entries.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(entries.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_set_and_get() {
        let store = InMemoryKeyValueStore::new();
        store.set_item("k", "v").unwrap();

        assert_eq!(store.get_item("k").unwrap(), Some("v".to_string()));
        assert_eq!(store.get_item("missing").unwrap(), None);
    }

    #[test]
    fn test_store_overwrite() {
        let store = InMemoryKeyValueStore::new();
        store.set_item("k", "v1").unwrap();
        store.set_item("k", "v2").unwrap();

        assert_eq!(store.get_item("k").unwrap(), Some("v2".to_string()));
        assert_eq!(store.keys().unwrap().len(), 1);
    }

    #[test]
    fn test_store_remove_missing_is_noop() {
        let store = InMemoryKeyValueStore::new();
        store.set_item("a", "1").unwrap();

        store.remove_item("missing").unwrap();
        assert_eq!(store.keys().unwrap(), vec!["a".to_string()]);
    }

    #[test]
    fn test_store_quota_exceeded() {
        let store = InMemoryKeyValueStore::with_quota(10);
        store.set_item("abc", "1234").unwrap();

        let result = store.set_item("def", "5678");
        match result {
            Err(DomainError::QuotaExceeded { requested, quota }) => {
                assert_eq!(requested, 14);
                assert_eq!(quota, 10);
            }
            other => panic!("expected quota error, got {:?}", other),
        }

        assert_eq!(store.get_item("def").unwrap(), None);
        assert_eq!(store.used_bytes().unwrap(), 7);
    }

    #[test]
    fn test_store_quota_counts_replaced_value_once() {
        let store = InMemoryKeyValueStore::with_quota(10);
        store.set_item("abc", "1234567").unwrap();

        // Replacing keeps usage at 10, not 20
        store.set_item("abc", "7654321").unwrap();
        assert_eq!(store.used_bytes().unwrap(), 10);
    }

    #[tokio::test]
    async fn test_bridge_clones_share_state() {
        let bridge = InMemoryBridge::with_entries([("other-app-setting", "Y")]);
        let handle = bridge.clone();

        bridge.set_item("k", "v").await.unwrap();

        let snapshot = handle.snapshot().unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("k"), Some(&"v".to_string()));
    }

    #[tokio::test]
    async fn test_bridge_remove_and_list() {
        let bridge = InMemoryBridge::new();
        bridge.set_item("a", "1").await.unwrap();
        bridge.set_item("b", "2").await.unwrap();

        bridge.remove_item("a").await.unwrap();
        bridge.remove_item("missing").await.unwrap();

        assert_eq!(bridge.get_all_keys().await.unwrap(), vec!["b".to_string()]);
        assert_eq!(bridge.get_item("a").await.unwrap(), None);
    }
}
