mod shutdown;

use crate::{BroadcastBus, BusConfig, Metrics};

/// Bus with the given per-subscriber capacity
pub(crate) fn bus_with_capacity(subscriber_capacity: usize) -> BroadcastBus {
    BroadcastBus::new(BusConfig { subscriber_capacity }, Metrics::new())
}
