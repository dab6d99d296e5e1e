//! Auth Cache Adapter
//!
//! Token cache for an OIDC authentication client with two interchangeable
//! backing stores:
//! - A synchronous, origin-scoped store for the browser build
//! - A durable SQL-backed store reached through the native shell's bridge,
//!   scoped so that only the client's own keys are listed or cleared

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use domain::{AuthClientOptions, Cache, DomainError, KeyNamespace, PlatformCapabilities};
use infrastructure::{BridgeConfig, CacheSelector, DetectedPlatform};

/// Process-wide authentication wiring, built once at startup
///
/// Lives for the whole process; there is no teardown.
#[derive(Debug)]
pub struct AuthRuntime {
    platform: DetectedPlatform,
    selector: CacheSelector,
    client_options: AuthClientOptions,
}

impl AuthRuntime {
    /// Detects the platform, selects the cache and builds the client options
    pub async fn bootstrap(config: &AppConfig) -> Result<Self, DomainError> {
        let platform = DetectedPlatform::from_settings(&config.platform)?;
        let namespace = KeyNamespace::new(config.cache.marker.clone())?;
        let selector = CacheSelector::new(BridgeConfig::from_settings(&config.cache), namespace);

        let cache = selector.select(&platform).await?;
        let client_options = AuthClientOptions::build(&config.auth, &platform, cache)?;

        tracing::info!(
            platform = %platform.platform(),
            redirect_uri = %client_options.redirect_uri,
            custom_cache = client_options.cache.is_some(),
            "Authentication runtime ready"
        );

        Ok(Self {
            platform,
            selector,
            client_options,
        })
    }

    pub fn platform(&self) -> &dyn PlatformCapabilities {
        &self.platform
    }

    /// Options to hand to the authentication client
    pub fn client_options(&self) -> &AuthClientOptions {
        &self.client_options
    }

    /// The selected cache; `None` means the client's default cache applies
    pub fn cache(&self) -> Option<Arc<dyn Cache>> {
        self.client_options.cache.clone()
    }

    pub fn selector(&self) -> &CacheSelector {
        &self.selector
    }
}
