//! SQLite key-value bridge with connection pooling

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::Row;

use crate::domain::storage::KeyValueBridge;
use crate::domain::DomainError;

/// Table names are interpolated into SQL, so only plain identifiers pass
static TABLE_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// SQLite bridge configuration
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    /// Database connection URL (e.g. "sqlite://auth-cache.db?mode=rwc")
    pub url: String,
    /// Key-value table name
    pub table_name: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://auth-cache.db?mode=rwc".to_string(),
            table_name: "auth_cache".to_string(),
            max_connections: 4,
            connect_timeout_secs: 30,
        }
    }
}

impl SqliteConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Private in-memory database; one connection so every query sees it
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            ..Default::default()
        }
    }

    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }
}

/// Durable key-value store on a single SQLite table
///
/// Holds every key the host application writes, not only the auth cache's;
/// scoping is the cache adapter's job.
pub struct SqliteBridge {
    pool: SqlitePool,
    table_name: String,
}

impl Debug for SqliteBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteBridge")
            .field("table_name", &self.table_name)
            .finish()
    }
}

impl SqliteBridge {
    /// Creates a bridge over an existing pool
    pub fn new(pool: SqlitePool, table_name: impl Into<String>) -> Result<Self, DomainError> {
        let table_name = table_name.into();

        if !TABLE_NAME_PATTERN.is_match(&table_name) {
            return Err(DomainError::configuration(format!(
                "Invalid table name '{}': must be a plain SQL identifier",
                table_name
            )));
        }

        Ok(Self { pool, table_name })
    }

    /// Opens a pool, creating the table if needed
    pub async fn connect(config: &SqliteConfig) -> Result<Self, DomainError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .connect(&config.url)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to connect to SQLite: {}", e)))?;

        let bridge = Self::new(pool, config.table_name.clone())?;
        bridge.ensure_table().await?;

        tracing::debug!(table = %bridge.table_name, "SQLite bridge ready");
        Ok(bridge)
    }

    /// Returns a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Ensures the key-value table exists
    pub async fn ensure_table(&self) -> Result<(), DomainError> {
        let query = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL
            )
            "#,
            self.table_name
        );

        sqlx::query(&query)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to create table: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueBridge for SqliteBridge {
    async fn get_item(&self, key: &str) -> Result<Option<String>, DomainError> {
        let query = format!("SELECT value FROM {} WHERE key = ?1", self.table_name);

        let row = sqlx::query(&query)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get key '{}': {}", key, e)))?;

        match row {
            Some(row) => {
                let value: String = row.try_get("value").map_err(|e| {
                    DomainError::storage(format!("Failed to read value for '{}': {}", key, e))
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let query = format!(
            "INSERT INTO {} (key, value) VALUES (?1, ?2) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            self.table_name
        );

        sqlx::query(&query)
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to set key '{}': {}", key, e)))?;

        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), DomainError> {
        let query = format!("DELETE FROM {} WHERE key = ?1", self.table_name);

        sqlx::query(&query)
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!("Failed to delete key '{}': {}", key, e))
            })?;

        Ok(())
    }

    async fn get_all_keys(&self) -> Result<Vec<String>, DomainError> {
        let query = format!("SELECT key FROM {}", self.table_name);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list keys: {}", e)))?;

        rows.iter()
            .map(|row| {
                row.try_get::<String, _>("key")
                    .map_err(|e| DomainError::storage(format!("Failed to read key: {}", e)))
            })
            .collect()
    }
}
