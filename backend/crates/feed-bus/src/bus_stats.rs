use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Point-in-time snapshot of bus counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BusStats {
    pub live_subscribers: usize,
    pub total_subscribed: u64,
    pub published: u64,
    pub delivered: u64,
    pub evicted: u64,
    pub closed: u64,
}

/// Monotonic counters owned by the bus
#[derive(Debug, Default)]
pub(crate) struct BusCounters {
    pub(crate) subscribed: AtomicU64,
    pub(crate) published: AtomicU64,
    pub(crate) delivered: AtomicU64,
    pub(crate) evicted: AtomicU64,
    pub(crate) closed: AtomicU64,
}

impl BusCounters {
    pub(crate) fn add(counter: &AtomicU64, n: u64) {
        counter.fetch_add(n, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self, live_subscribers: usize) -> BusStats {
        BusStats {
            live_subscribers,
            total_subscribed: self.subscribed.load(Ordering::Relaxed),
            published: self.published.load(Ordering::Relaxed),
            delivered: self.delivered.load(Ordering::Relaxed),
            evicted: self.evicted.load(Ordering::Relaxed),
            closed: self.closed.load(Ordering::Relaxed),
        }
    }
}
