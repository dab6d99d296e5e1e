//! Domain layer - Cache contract, backing store interfaces and platform signals

pub mod auth_client;
pub mod cache;
pub mod error;
pub mod platform;
pub mod shell;
pub mod storage;

pub use auth_client::AuthClientOptions;
pub use cache::{Cache, CacheExt, Completion, KeyNamespace, AUTH_CACHE_MARKER};
pub use error::{DomainError, KeyFailure};
pub use platform::{Platform, PlatformCapabilities};
pub use shell::{close_overlay, BrowserOverlay};
pub use storage::{KeyValueBridge, KeyValueStore};
