//! Storage domain - Backing store interfaces the cache adapters consume

mod bridge;
mod store;

pub use bridge::KeyValueBridge;
pub use store::KeyValueStore;

#[cfg(test)]
pub use bridge::MockKeyValueBridge;
