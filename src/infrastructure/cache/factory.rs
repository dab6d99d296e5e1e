//! Cache selection at startup

use std::fmt;
use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::domain::cache::{Cache, KeyNamespace};
use crate::domain::platform::PlatformCapabilities;
use crate::domain::DomainError;
use crate::infrastructure::storage::{BridgeConfig, BridgeFactory};

use super::scoped::AsyncScopedCache;

/// Decides once which cache, if any, the authentication client receives
///
/// On a plain browser the answer is `None` and the client keeps its own
/// default cache. Inside the native shell the bridge is opened and wrapped
/// in an [`AsyncScopedCache`]. The outcome is memoized; a failed bridge
/// construction is not, so a later call may retry it.
pub struct CacheSelector {
    bridge: BridgeConfig,
    namespace: KeyNamespace,
    selected: OnceCell<Option<Arc<dyn Cache>>>,
}

impl fmt::Debug for CacheSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheSelector")
            .field("bridge", &self.bridge.backend())
            .field("namespace", &self.namespace)
            .field("selected", &self.selected.initialized())
            .finish()
    }
}

impl CacheSelector {
    pub fn new(bridge: BridgeConfig, namespace: KeyNamespace) -> Self {
        Self {
            bridge,
            namespace,
            selected: OnceCell::new(),
        }
    }

    /// Returns the cache for this platform, constructing it on first call
    pub async fn select(
        &self,
        platform: &dyn PlatformCapabilities,
    ) -> Result<Option<Arc<dyn Cache>>, DomainError> {
        let selected = self
            .selected
            .get_or_try_init(|| async {
                if !platform.is_native_platform() {
                    tracing::info!(
                        platform = %platform.platform(),
                        "Native storage unavailable, using the client's default cache"
                    );
                    return Ok(None);
                }

                let bridge = BridgeFactory::create(&self.bridge).await?;
                let cache: Arc<dyn Cache> =
                    Arc::new(AsyncScopedCache::new(bridge, self.namespace.clone()));

                tracing::info!(
                    platform = %platform.platform(),
                    backend = ?self.bridge.backend(),
                    marker = %self.namespace.marker(),
                    "Native scoped cache selected"
                );
                Ok::<_, DomainError>(Some(cache))
            })
            .await?;

        Ok(selected.clone())
    }

    /// The memoized selection, if `select` has completed
    pub fn selected(&self) -> Option<Option<Arc<dyn Cache>>> {
        self.selected.get().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cache::{CacheExt, Completion};
    use crate::domain::platform::Platform;
    use crate::infrastructure::storage::{InMemoryBridge, SqliteConfig};

    #[derive(Debug)]
    struct Fixed(Platform);

    impl PlatformCapabilities for Fixed {
        fn platform(&self) -> Platform {
            self.0
        }
    }

    #[tokio::test]
    async fn test_web_selects_no_cache() {
        let selector = CacheSelector::new(BridgeConfig::in_memory(), KeyNamespace::default());

        let cache = selector.select(&Fixed(Platform::Web)).await.unwrap();
        assert!(cache.is_none());
        assert!(matches!(selector.selected(), Some(None)));
    }

    #[tokio::test]
    async fn test_native_selects_scoped_cache() {
        let bridge = InMemoryBridge::with_entries([("other-app-setting", "\"Y\"")]);
        let selector =
            CacheSelector::new(BridgeConfig::InMemory(bridge.clone()), KeyNamespace::default());

        let cache = selector
            .select(&Fixed(Platform::Android))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(cache.completion(), Completion::Deferred);

        cache.set("@@auth0spajs@@::abc", &"X").await.unwrap();
        assert_eq!(
            cache.all_keys().await.unwrap(),
            vec!["@@auth0spajs@@::abc".to_string()]
        );

        cache.clear().await.unwrap();
        assert_eq!(bridge.snapshot().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_selection_is_memoized() {
        let selector = CacheSelector::new(BridgeConfig::in_memory(), KeyNamespace::default());
        assert!(selector.selected().is_none());

        let first = selector.select(&Fixed(Platform::Ios)).await.unwrap().unwrap();
        let second = selector.select(&Fixed(Platform::Ios)).await.unwrap().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_decision_is_not_revisited() {
        let selector = CacheSelector::new(BridgeConfig::in_memory(), KeyNamespace::default());

        let first = selector.select(&Fixed(Platform::Web)).await.unwrap();
        let second = selector.select(&Fixed(Platform::Ios)).await.unwrap();

        assert!(first.is_none());
        assert!(second.is_none());
    }

    #[tokio::test]
    async fn test_failed_construction_is_not_memoized() {
        let config = SqliteConfig::in_memory().with_table_name("not a table");
        let selector = CacheSelector::new(BridgeConfig::sqlite(config), KeyNamespace::default());

        let result = selector.select(&Fixed(Platform::Android)).await;
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
        assert!(selector.selected().is_none());
    }

    #[tokio::test]
    async fn test_native_over_sqlite() {
        let selector = CacheSelector::new(
            BridgeConfig::sqlite(SqliteConfig::in_memory()),
            KeyNamespace::default(),
        );

        let cache = selector
            .select(&Fixed(Platform::Ios))
            .await
            .unwrap()
            .unwrap();

        cache.set("@@auth0spajs@@::k", &42).await.unwrap();

        let value: Option<i32> = cache.get("@@auth0spajs@@::k").await.unwrap();
        assert_eq!(value, Some(42));
    }
}
