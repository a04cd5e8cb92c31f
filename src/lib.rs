//! expiremap - A thread-safe in-memory TTL cache
//!
//! Every entry is stored with an absolute expiration instant computed from a
//! per-entry TTL. Expired entries are reclaimed lazily by the reads that
//! touch them and actively by a background sweeper task that purges the map
//! on a fixed interval.
//!
//! # Features
//! - Generic over key and value types, no per-type setup
//! - Lazy expiration on `get`/`pop`/`contains_key`, active expiration by a
//!   per-cache background sweeper (interval configurable via [`CacheConfig`])
//! - Cheap cloneable handles sharing one store and one sweeper
//! - Synchronous, lock-based operations; the only async piece is the sweeper
//! - Sweeper stops on [`Cache::shutdown`] or when the last handle is dropped
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use expiremap::{Cache, Lookup};
//!
//! #[tokio::main]
//! async fn main() {
//!     let cache = Cache::new();
//!     cache.set("session".to_string(), 42u64, Duration::from_secs(30));
//!
//!     assert_eq!(cache.get(&"session".to_string()), Lookup::Hit(42));
//!     assert_eq!(cache.pop(&"session".to_string()), Lookup::Hit(42));
//!     assert_eq!(cache.get(&"session".to_string()), Lookup::Miss);
//! }
//! ```

pub mod cache;
pub mod config;
mod tasks;

pub use cache::{Cache, Lookup};
pub use config::CacheConfig;
