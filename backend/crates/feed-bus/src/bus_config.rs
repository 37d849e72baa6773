/// Default per-subscriber queue capacity.
///
/// Covers a brief consumer stall, not sustained lag.
pub const DEFAULT_SUBSCRIBER_CAPACITY: usize = 5;

/// Configuration for the broadcast bus
#[derive(Debug, Clone)]
pub struct BusConfig {
    /// Events buffered per subscriber before it is evicted (must be >= 1)
    pub subscriber_capacity: usize,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            subscriber_capacity: DEFAULT_SUBSCRIBER_CAPACITY,
        }
    }
}
