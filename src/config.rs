//! Configuration Module
//!
//! Tuning knobs for a cache instance, applied at construction time.

use std::time::Duration;

/// How often the background sweeper wakes up by default (5 seconds).
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(5);

/// Cache construction parameters.
///
/// The only knob is the sweep cadence: how often the background task takes
/// the exclusive lock and walks the whole map removing expired entries. A
/// shorter interval tightens the window in which expired entries linger in
/// memory; a longer one reduces lock pressure on large maps.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Interval between background sweep passes
    pub sweep_interval: Duration,
}

impl CacheConfig {
    /// Creates a configuration with the default sweep interval.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the interval between background sweep passes.
    ///
    /// # Arguments
    /// * `interval` - Time between sweeps; must be non-zero
    ///
    /// # Panics
    /// A zero interval panics when the cache is constructed, since the
    /// sweeper's timer rejects a zero period.
    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = interval;
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }
}
