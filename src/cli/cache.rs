//! Cache commands - operate on the durable store through the scoped adapter

use std::sync::Arc;

use anyhow::Context;
use clap::Subcommand;
use serde_json::Value;

use crate::config::AppConfig;
use crate::domain::{Cache, CacheExt, KeyNamespace};
use crate::infrastructure::{AsyncScopedCache, BridgeConfig, BridgeFactory};

#[derive(Subcommand)]
pub enum CacheCommand {
    /// List keys owned by the auth cache
    Keys,

    /// Print the decoded value stored under a key
    Get { key: String },

    /// Store a JSON value under a key
    Set { key: String, value: String },

    /// Remove a single key
    Remove { key: String },

    /// Remove every key owned by the auth cache
    Clear,
}

pub async fn run(command: CacheCommand, config: &AppConfig) -> anyhow::Result<()> {
    let cache = open(config).await?;
    let cache = cache.as_ref();

    match command {
        CacheCommand::Keys => {
            for key in keys(cache).await? {
                println!("{}", key);
            }
        }
        CacheCommand::Get { key } => match get(cache, &key).await? {
            Some(value) => println!("{}", serde_json::to_string_pretty(&value)?),
            None => anyhow::bail!("No entry for '{}'", key),
        },
        CacheCommand::Set { key, value } => set(cache, &key, &value).await?,
        CacheCommand::Remove { key } => remove(cache, &key).await?,
        CacheCommand::Clear => {
            clear(cache).await?;
            tracing::info!("Auth cache cleared");
        }
    }

    Ok(())
}

/// Opens the configured bridge wrapped in the scoped adapter
pub async fn open(config: &AppConfig) -> anyhow::Result<Arc<dyn Cache>> {
    let namespace = KeyNamespace::new(config.cache.marker.clone())?;
    let bridge = BridgeFactory::create(&BridgeConfig::from_settings(&config.cache))
        .await
        .context("Failed to open the cache store")?;

    Ok(Arc::new(AsyncScopedCache::new(bridge, namespace)))
}

pub async fn keys(cache: &dyn Cache) -> anyhow::Result<Vec<String>> {
    let mut keys = cache.all_keys().await?;
    keys.sort();
    Ok(keys)
}

pub async fn get(cache: &dyn Cache, key: &str) -> anyhow::Result<Option<Value>> {
    Ok(cache.get(key).await?)
}

pub async fn set(cache: &dyn Cache, key: &str, raw: &str) -> anyhow::Result<()> {
    let value: Value =
        serde_json::from_str(raw).with_context(|| format!("Value for '{}' is not JSON", key))?;
    cache.set(key, &value).await?;
    Ok(())
}

pub async fn remove(cache: &dyn Cache, key: &str) -> anyhow::Result<()> {
    cache.remove(key).await?;
    Ok(())
}

pub async fn clear(cache: &dyn Cache) -> anyhow::Result<()> {
    cache.clear().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryBridge;

    fn cache(bridge: &InMemoryBridge) -> AsyncScopedCache {
        AsyncScopedCache::with_default_namespace(Arc::new(bridge.clone()))
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let bridge = InMemoryBridge::new();
        let cache = cache(&bridge);

        set(&cache, "@@auth0spajs@@::k", r#"{"a":1,"b":[1,2,3]}"#)
            .await
            .unwrap();

        let value = get(&cache, "@@auth0spajs@@::k").await.unwrap();
        assert_eq!(value, Some(serde_json::json!({"a": 1, "b": [1, 2, 3]})));
    }

    #[tokio::test]
    async fn test_set_rejects_non_json() {
        let bridge = InMemoryBridge::new();
        let cache = cache(&bridge);

        assert!(set(&cache, "k", "not json").await.is_err());
        assert!(bridge.snapshot().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_keys_are_sorted_and_scoped() {
        let bridge = InMemoryBridge::with_entries([
            ("@@auth0spajs@@::b", "1"),
            ("@@auth0spajs@@::a", "2"),
            ("other-app-setting", "3"),
        ]);

        let listed = keys(&cache(&bridge)).await.unwrap();
        assert_eq!(
            listed,
            vec!["@@auth0spajs@@::a".to_string(), "@@auth0spajs@@::b".to_string()]
        );
    }

    #[tokio::test]
    async fn test_clear_and_remove() {
        let bridge = InMemoryBridge::with_entries([
            ("@@auth0spajs@@::a", "1"),
            ("@@auth0spajs@@::b", "2"),
            ("other-app-setting", "3"),
        ]);
        let cache = cache(&bridge);

        remove(&cache, "@@auth0spajs@@::a").await.unwrap();
        assert_eq!(bridge.snapshot().unwrap().len(), 2);

        clear(&cache).await.unwrap();
        let snapshot = bridge.snapshot().unwrap();
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.contains_key("other-app-setting"));
    }

    #[tokio::test]
    async fn test_run_against_empty_in_memory_store() {
        let mut config = AppConfig::default();
        config.cache.backend = crate::config::BridgeBackend::InMemory;

        run(CacheCommand::Keys, &config).await.unwrap();
        run(CacheCommand::Clear, &config).await.unwrap();

        let missing = run(CacheCommand::Get { key: "k".to_string() }, &config).await;
        assert!(missing.is_err());
    }

    #[tokio::test]
    async fn test_open_in_memory_backend() {
        let mut config = AppConfig::default();
        config.cache.backend = crate::config::BridgeBackend::InMemory;

        let cache = open(&config).await.unwrap();
        assert!(keys(cache.as_ref()).await.unwrap().is_empty());
    }
}
