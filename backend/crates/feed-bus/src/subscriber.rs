use crate::broadcast_bus::BusShared;
use crate::{Event, SubscriberId};

use std::sync::{Arc, Weak};

use tokio::sync::mpsc;

/// Receiving end of one subscription.
///
/// Dropping it unregisters the subscription from the bus.
pub struct Subscriber {
    id: SubscriberId,
    receiver: mpsc::Receiver<Arc<Event>>,
    bus: Weak<BusShared>,
}

impl Subscriber {
    pub(crate) fn new(
        id: SubscriberId,
        receiver: mpsc::Receiver<Arc<Event>>,
        bus: Weak<BusShared>,
    ) -> Self {
        Self { id, receiver, bus }
    }

    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Wait for the next event.
    ///
    /// Returns `None` once the subscription has been cut off (evicted, or the
    /// bus is gone) and everything queued before that has been drained.
    pub async fn recv(&mut self) -> Option<Arc<Event>> {
        self.receiver.recv().await
    }

    /// Take the next queued event without waiting
    pub fn try_recv(&mut self) -> Option<Arc<Event>> {
        self.receiver.try_recv().ok()
    }

    /// Number of events waiting in the queue
    pub fn queued(&self) -> usize {
        self.receiver.len()
    }

    /// False once every handle to the bus has been dropped
    pub fn is_bus_alive(&self) -> bool {
        self.bus.strong_count() > 0
    }

    /// True once the bus no longer delivers to this subscriber
    pub fn is_detached(&self) -> bool {
        self.receiver.is_closed()
    }
}

impl Drop for Subscriber {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.unregister(self.id);
        }
    }
}

impl std::fmt::Debug for Subscriber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscriber")
            .field("id", &self.id)
            .field("queued", &self.receiver.len())
            .finish()
    }
}
