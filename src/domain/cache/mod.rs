//! Cache domain - Token cache contract shared by all adapters

pub mod codec;
mod namespace;
mod repository;

pub use namespace::{KeyNamespace, AUTH_CACHE_MARKER};
pub use repository::{Cache, CacheExt, Completion};

#[cfg(test)]
pub use repository::mock::MockCache;
