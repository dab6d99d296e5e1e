//! Storage infrastructure - Backing store implementations

mod factory;
mod in_memory;
mod sqlite;

pub use factory::{BridgeConfig, BridgeFactory};
pub use in_memory::{InMemoryBridge, InMemoryKeyValueStore};
pub use sqlite::{SqliteBridge, SqliteConfig};
