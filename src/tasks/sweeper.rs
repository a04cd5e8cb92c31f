//! TTL Sweeper Task
//!
//! Background task that periodically removes expired cache entries.

use std::hash::Hash;
use std::sync::Weak;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::Shared;

/// Spawns the background task that periodically purges expired entries.
///
/// Each tick takes the cache's write lock once and walks the whole map.
/// The task holds only a weak reference to the cache, upgraded per tick,
/// so it never keeps a dropped cache alive; it exits when the stop signal
/// fires or when the upgrade fails.
///
/// # Arguments
/// * `shared` - Weak reference to the cache state to sweep
/// * `interval` - Time between sweep passes; must be non-zero
/// * `shutdown_rx` - Stop signal, sent by `shutdown` or on cache drop
///
/// # Returns
/// A JoinHandle for the spawned task, used by tests to observe exit.
pub(crate) fn spawn_sweeper<K, V>(
    shared: Weak<Shared<K, V>>,
    interval: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    // Created before the spawn so a zero interval fails in the constructor,
    // not inside a detached task.
    let mut ticker = tokio::time::interval(interval);

    tokio::spawn(async move {
        info!("Starting TTL sweeper with interval of {:?}", interval);

        // The first tick of an interval completes immediately; consume it so
        // the first sweep happens a full interval after construction.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    // Strong reference held only for the duration of the
                    // pass, never across a wait.
                    let shared = match shared.upgrade() {
                        Some(shared) => shared,
                        None => {
                            debug!("TTL sweeper: cache dropped, stopping");
                            break;
                        }
                    };

                    let removed = shared.purge_expired();
                    if removed > 0 {
                        info!("TTL sweep: removed {} expired entries", removed);
                    } else {
                        debug!("TTL sweep: no expired entries found");
                    }
                }
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
            }
        }

        info!("TTL sweeper stopped");
    })
}
