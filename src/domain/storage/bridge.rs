//! Asynchronous bridge to the native platform's durable storage

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Durable key-value store reached through the native bridge
///
/// The underlying database may hold entries written by unrelated parts of
/// the host application. Implementations must not filter keys themselves.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait KeyValueBridge: Send + Sync + Debug {
    /// Reads the text stored under `key`
    async fn get_item(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Writes `value` under `key`; completion implies the write is durable
    async fn set_item(&self, key: &str, value: &str) -> Result<(), DomainError>;

    /// Deletes `key`; absent keys are not an error
    async fn remove_item(&self, key: &str) -> Result<(), DomainError>;

    /// Lists every key in the database, including foreign ones
    async fn get_all_keys(&self) -> Result<Vec<String>, DomainError>;
}
