//! Namespace-scoped cache adapter over the native bridge

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;

use crate::domain::cache::{Cache, Completion, KeyNamespace};
use crate::domain::storage::KeyValueBridge;
use crate::domain::{DomainError, KeyFailure};

/// Cache adapter for the durable store shared with the host application
///
/// `all_keys` and `clear` only ever see keys owned by the namespace; other
/// entries in the same database are never listed or deleted. Single-key
/// operations pass through unchanged.
#[derive(Debug, Clone)]
pub struct AsyncScopedCache {
    bridge: Arc<dyn KeyValueBridge>,
    namespace: KeyNamespace,
}

impl AsyncScopedCache {
    pub fn new(bridge: Arc<dyn KeyValueBridge>, namespace: KeyNamespace) -> Self {
        Self { bridge, namespace }
    }

    /// Creates an adapter scoped to the authentication client's marker
    pub fn with_default_namespace(bridge: Arc<dyn KeyValueBridge>) -> Self {
        Self::new(bridge, KeyNamespace::default())
    }

    pub fn namespace(&self) -> &KeyNamespace {
        &self.namespace
    }
}

#[async_trait]
impl Cache for AsyncScopedCache {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.bridge.get_item(key).await
    }

    async fn set_raw(&self, key: &str, value: &str) -> Result<(), DomainError> {
        if !self.namespace.owns(key) {
            tracing::debug!(
                key = %key,
                marker = %self.namespace.marker(),
                "Writing key outside the cache namespace; clear() will not remove it"
            );
        }

        self.bridge.set_item(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), DomainError> {
        self.bridge.remove_item(key).await
    }

    /// Deletes every owned key concurrently
    ///
    /// Not transactional: keys deleted before a failure stay deleted, and
    /// every failed key is reported in `DomainError::PartialClear`.
    async fn clear(&self) -> Result<(), DomainError> {
        let keys = self.all_keys().await?;
        let attempted = keys.len();

        let results = join_all(keys.iter().map(|key| async move {
            (key, self.bridge.remove_item(key).await)
        }))
        .await;

        let failures: Vec<KeyFailure> = results
            .into_iter()
            .filter_map(|(key, result)| {
                result
                    .err()
                    .map(|e| KeyFailure::new(key.clone(), e.to_string()))
            })
            .collect();

        if failures.is_empty() {
            tracing::debug!(removed = attempted, "Cleared cache namespace");
            return Ok(());
        }

        tracing::warn!(
            attempted,
            failed = failures.len(),
            "Cache namespace only partially cleared"
        );
        Err(DomainError::partial_clear(attempted, failures))
    }

    async fn all_keys(&self) -> Result<Vec<String>, DomainError> {
        let keys = self.bridge.get_all_keys().await?;
        Ok(self.namespace.retain_owned(keys))
    }

    fn completion(&self) -> Completion {
        Completion::Deferred
    }
}
