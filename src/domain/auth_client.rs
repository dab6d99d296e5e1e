//! Options handed to the OIDC authentication client

use std::fmt;
use std::sync::Arc;

use crate::config::AuthConfig;
use crate::domain::cache::Cache;
use crate::domain::platform::PlatformCapabilities;
use crate::domain::DomainError;

/// Configuration consumed by the authentication client
///
/// `cache` is `None` when the client should keep its built-in default cache.
#[derive(Clone)]
pub struct AuthClientOptions {
    pub domain: String,
    pub client_id: String,
    pub audience: Option<String>,
    pub redirect_uri: String,
    pub use_refresh_tokens: bool,
    pub use_refresh_tokens_fallback: bool,
    pub cache: Option<Arc<dyn Cache>>,
}

impl fmt::Debug for AuthClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthClientOptions")
            .field("domain", &self.domain)
            .field("client_id", &self.client_id)
            .field("audience", &self.audience)
            .field("redirect_uri", &self.redirect_uri)
            .field("use_refresh_tokens", &self.use_refresh_tokens)
            .field(
                "use_refresh_tokens_fallback",
                &self.use_refresh_tokens_fallback,
            )
            .field("cache", &self.cache.as_ref().map(|_| "<custom>"))
            .finish()
    }
}

impl AuthClientOptions {
    pub fn build(
        config: &AuthConfig,
        platform: &dyn PlatformCapabilities,
        cache: Option<Arc<dyn Cache>>,
    ) -> Result<Self, DomainError> {
        if config.domain.trim().is_empty() {
            return Err(DomainError::configuration("auth.domain is required"));
        }

        if config.client_id.trim().is_empty() {
            return Err(DomainError::configuration("auth.client_id is required"));
        }

        let redirect_uri = redirect_uri(config, platform)?;

        Ok(Self {
            domain: config.domain.clone(),
            client_id: config.client_id.clone(),
            audience: config.audience.clone(),
            redirect_uri,
            use_refresh_tokens: true,
            use_refresh_tokens_fallback: false,
            cache,
        })
    }
}

/// Redirect target for the authorization response
///
/// Native builds re-enter the app through the package's custom scheme; the
/// browser build returns to its own origin.
pub fn redirect_uri(
    config: &AuthConfig,
    platform: &dyn PlatformCapabilities,
) -> Result<String, DomainError> {
    if !platform.is_native_platform() {
        return Ok(config.web_origin.clone());
    }

    if config.package_id.trim().is_empty() {
        return Err(DomainError::configuration(
            "auth.package_id is required on native platforms",
        ));
    }

    Ok(format!(
        "{package}://{domain}/capacitor/{package}/login",
        package = config.package_id,
        domain = config.domain
    ))
}
