//! Infrastructure layer - Adapters, stores and runtime wiring

pub mod cache;
pub mod logging;
pub mod platform;
pub mod storage;

pub use cache::{AsyncScopedCache, CacheSelector, SyncKeyValueCache};
pub use platform::{DetectedPlatform, StaticPlatform};
pub use storage::{
    BridgeConfig, BridgeFactory, InMemoryBridge, InMemoryKeyValueStore, SqliteBridge,
    SqliteConfig,
};
