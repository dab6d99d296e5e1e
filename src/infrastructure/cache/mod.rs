//! Cache infrastructure - Cache adapter implementations

mod factory;
mod scoped;
mod sync_cache;

pub use factory::CacheSelector;
pub use scoped::AsyncScopedCache;
pub use sync_cache::SyncKeyValueCache;
