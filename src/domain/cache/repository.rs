//! Cache trait definition

use std::fmt::Debug;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::domain::DomainError;

use super::codec;

/// How an adapter's operations complete
///
/// Consumers branch on this flag rather than on the adapter type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The returned future is already resolved; no suspension happens
    Immediate,
    /// The operation suspends until the backing store answers
    Deferred,
}

/// Cache contract consumed by the authentication client
///
/// This trait works on stored text to stay dyn-compatible.
/// Use [`CacheExt`] for typed get/set operations.
#[async_trait]
pub trait Cache: Send + Sync + Debug {
    /// Gets the stored text for a key, `None` if absent
    async fn get_raw(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Stores text under a key, overwriting any prior value
    async fn set_raw(&self, key: &str, value: &str) -> Result<(), DomainError>;

    /// Removes a key; absent keys are not an error
    async fn remove(&self, key: &str) -> Result<(), DomainError>;

    /// Removes every entry this adapter is responsible for
    async fn clear(&self) -> Result<(), DomainError>;

    /// Lists every key this adapter is responsible for, in store order
    async fn all_keys(&self) -> Result<Vec<String>, DomainError>;

    /// Whether operations complete immediately or after a suspension
    fn completion(&self) -> Completion {
        Completion::Deferred
    }
}

/// Extension trait providing typed get/set operations
pub trait CacheExt: Cache {
    /// Gets a typed value from the cache
    fn get<'a, V>(
        &'a self,
        key: &'a str,
    ) -> impl std::future::Future<Output = Result<Option<V>, DomainError>> + Send
    where
        V: DeserializeOwned + Send,
    {
        async move {
            match self.get_raw(key).await? {
                Some(data) => Ok(Some(codec::decode(key, &data)?)),
                None => Ok(None),
            }
        }
    }

    /// Sets a typed value in the cache
    fn set<'a, V>(
        &'a self,
        key: &'a str,
        value: &'a V,
    ) -> impl std::future::Future<Output = Result<(), DomainError>> + Send
    where
        V: Serialize + Send + Sync,
    {
        async move {
            let data = codec::encode(value)?;
            self.set_raw(key, &data).await
        }
    }
}

// Blanket implementation for all types implementing Cache
impl<T: Cache + ?Sized> CacheExt for T {}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Mock cache for testing consumers of the contract
    #[derive(Debug)]
    pub struct MockCache {
        entries: Mutex<HashMap<String, String>>,
        error: Mutex<Option<String>>,
    }

    impl Default for MockCache {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockCache {
        pub fn new() -> Self {
            Self {
                entries: Mutex::new(HashMap::new()),
                error: Mutex::new(None),
            }
        }

        pub fn with_entry<V: Serialize>(self, key: &str, value: &V) -> Self {
            let json = serde_json::to_string(value).unwrap();
            self.entries.lock().unwrap().insert(key.to_string(), json);
            self
        }

        pub fn with_raw_entry(self, key: &str, raw: &str) -> Self {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), raw.to_string());
            self
        }

        pub fn with_error(self, error: impl Into<String>) -> Self {
            *self.error.lock().unwrap() = Some(error.into());
            self
        }

        fn check_error(&self) -> Result<(), DomainError> {
            if let Some(error) = self.error.lock().unwrap().clone() {
                return Err(DomainError::storage(error));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl Cache for MockCache {
        async fn get_raw(&self, key: &str) -> Result<Option<String>, DomainError> {
            self.check_error()?;
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        async fn set_raw(&self, key: &str, value: &str) -> Result<(), DomainError> {
            self.check_error()?;
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn remove(&self, key: &str) -> Result<(), DomainError> {
            self.check_error()?;
            self.entries.lock().unwrap().remove(key);
            Ok(())
        }

        async fn clear(&self) -> Result<(), DomainError> {
            self.check_error()?;
            self.entries.lock().unwrap().clear();
            Ok(())
        }

        async fn all_keys(&self) -> Result<Vec<String>, DomainError> {
            self.check_error()?;
            Ok(self.entries.lock().unwrap().keys().cloned().collect())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use serde_json::{json, Value};

        #[tokio::test]
        async fn test_mock_cache_set_get() {
            let cache = MockCache::new();
            cache.set("key1", &"value1").await.unwrap();

            let result: Option<String> = cache.get("key1").await.unwrap();
            assert_eq!(result, Some("value1".to_string()));
        }

        #[tokio::test]
        async fn test_mock_cache_get_missing() {
            let cache = MockCache::new();

            let result: Option<String> = cache.get("missing").await.unwrap();
            assert!(result.is_none());
        }

        #[tokio::test]
        async fn test_mock_cache_with_error() {
            let cache = MockCache::new().with_error("Test error");

            let result: Result<Option<String>, _> = cache.get("key").await;
            assert!(result.is_err());
        }

        #[tokio::test]
        async fn test_typed_get_surfaces_corrupt_entry() {
            let cache = MockCache::new().with_raw_entry("k", "{oops");

            let result: Result<Option<Value>, _> = cache.get("k").await;
            assert!(matches!(result, Err(DomainError::Deserialization { .. })));
        }

        #[tokio::test]
        async fn test_typed_round_trip_through_dyn_cache() {
            let cache: std::sync::Arc<dyn Cache> = std::sync::Arc::new(MockCache::new());
            let value = json!({"a": 1, "b": [1, 2, 3]});

            cache.set("k", &value).await.unwrap();

            let result: Option<Value> = cache.get("k").await.unwrap();
            assert_eq!(result, Some(value));
        }

        #[test]
        fn test_default_completion_is_deferred() {
            assert_eq!(MockCache::new().completion(), Completion::Deferred);
        }
    }
}
