//! Cache Module
//!
//! Provides in-memory key-value caching with per-entry TTL expiration.

mod entry;
mod lookup;
mod store;


// Re-export public types
pub use lookup::Lookup;
pub use store::Cache;

// Crate-internal plumbing shared with the sweeper task
pub(crate) use entry::Entry;
pub(crate) use store::Shared;
