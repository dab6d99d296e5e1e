//! Bridge factory for runtime backend selection

use std::sync::Arc;

use crate::config::{BridgeBackend, CacheSettings};
use crate::domain::storage::KeyValueBridge;
use crate::domain::DomainError;

use super::in_memory::InMemoryBridge;
use super::sqlite::{SqliteBridge, SqliteConfig};

/// Bridge configuration
#[derive(Debug, Clone)]
pub enum BridgeConfig {
    /// Shared in-process map (for testing/development)
    InMemory(InMemoryBridge),
    /// SQLite database
    Sqlite(SqliteConfig),
}

impl BridgeConfig {
    /// Creates a fresh in-memory bridge configuration
    pub fn in_memory() -> Self {
        Self::InMemory(InMemoryBridge::new())
    }

    /// Creates a SQLite configuration
    pub fn sqlite(config: SqliteConfig) -> Self {
        Self::Sqlite(config)
    }

    /// Builds the configuration from the `cache` settings section
    pub fn from_settings(settings: &CacheSettings) -> Self {
        match settings.backend {
            BridgeBackend::InMemory => Self::in_memory(),
            BridgeBackend::Sqlite => Self::Sqlite(
                SqliteConfig::new(settings.database_url.clone())
                    .with_table_name(settings.table_name.clone())
                    .with_max_connections(settings.max_connections)
                    .with_connect_timeout(settings.connect_timeout_secs),
            ),
        }
    }

    pub fn backend(&self) -> BridgeBackend {
        match self {
            Self::InMemory(_) => BridgeBackend::InMemory,
            Self::Sqlite(_) => BridgeBackend::Sqlite,
        }
    }
}

/// Factory for opening bridge instances
#[derive(Debug)]
pub struct BridgeFactory;

impl BridgeFactory {
    /// Opens a bridge based on the configuration
    pub async fn create(config: &BridgeConfig) -> Result<Arc<dyn KeyValueBridge>, DomainError> {
        match config {
            BridgeConfig::InMemory(bridge) => Ok(Arc::new(bridge.clone())),
            BridgeConfig::Sqlite(sqlite_config) => {
                let bridge = SqliteBridge::connect(sqlite_config).await?;
                Ok(Arc::new(bridge))
            }
        }
    }
}
