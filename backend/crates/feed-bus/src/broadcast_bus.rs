use crate::bus_stats::BusCounters;
use crate::{BusConfig, BusStats, Event, Metrics, Result as BusResult, Subscriber, SubscriberId};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info, warn};
use tokio::sync::mpsc::{self, error::TrySendError};

/// Outcome of a single [`BroadcastBus::publish`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishReport {
    /// Subscribers the event was enqueued for
    pub delivered: usize,
    /// Subscribers removed because their queue was full
    pub evicted: usize,
}

/// Fans events out to every live subscriber.
///
/// Each subscriber owns a bounded queue. `publish` never waits: a subscriber
/// whose queue is full is evicted on the spot and gets nothing further. The
/// evicted subscriber still drains what was queued before, after which its
/// `recv` returns `None`.
///
/// The live set sits behind one short-lived mutex. It is never held across an
/// `.await` or any I/O, and eviction happens in the same critical section that
/// detects the overflow.
pub struct BroadcastBus {
    shared: Arc<BusShared>,
}

pub(crate) struct BusShared {
    subscribers: Mutex<HashMap<SubscriberId, mpsc::Sender<Arc<Event>>>>,
    config: BusConfig,
    metrics: Metrics,
    counters: BusCounters,
}

impl BroadcastBus {
    pub fn new(config: BusConfig, metrics: Metrics) -> Self {
        Self {
            shared: Arc::new(BusShared {
                subscribers: Mutex::new(HashMap::new()),
                config,
                metrics,
                counters: BusCounters::default(),
            }),
        }
    }

    /// Register a new subscriber with an empty queue.
    ///
    /// Only events published after this call are delivered to it.
    pub fn subscribe(&self) -> Subscriber {
        let capacity = self.shared.config.subscriber_capacity.max(1);
        let (sender, receiver) = mpsc::channel(capacity);
        let id = SubscriberId::new();

        // Live gauge is set under the lock
        let live = {
            let mut subscribers = self.shared.lock();
            subscribers.insert(id, sender);
            self.shared.metrics.subscriber_added(subscribers.len());
            subscribers.len()
        };

        BusCounters::add(&self.shared.counters.subscribed, 1);
        info!("Subscriber {id} joined (capacity {capacity}, {live} live)");

        Subscriber::new(id, receiver, Arc::downgrade(&self.shared))
    }

    /// Offer `event` to every live subscriber without waiting.
    ///
    /// Publishing to an empty bus is a no-op.
    pub fn publish(&self, event: Event) -> PublishReport {
        let event = Arc::new(event);
        let mut report = PublishReport::default();
        let mut evicted = Vec::new();
        let mut closed = Vec::new();

        let live = {
            let mut subscribers = self.shared.lock();
            subscribers.retain(|id, sender| match sender.try_send(Arc::clone(&event)) {
                Ok(()) => {
                    report.delivered += 1;
                    true
                }
                Err(TrySendError::Full(_)) => {
                    evicted.push(*id);
                    false
                }
                Err(TrySendError::Closed(_)) => {
                    closed.push(*id);
                    false
                }
            });

            let live = subscribers.len();
            for _ in &evicted {
                self.shared.metrics.subscriber_removed("evicted", live);
            }
            for _ in &closed {
                self.shared.metrics.subscriber_removed("closed", live);
            }
            live
        };
        report.evicted = evicted.len();

        let counters = &self.shared.counters;
        BusCounters::add(&counters.published, 1);
        BusCounters::add(&counters.delivered, report.delivered as u64);
        BusCounters::add(&counters.evicted, evicted.len() as u64);
        BusCounters::add(&counters.closed, closed.len() as u64);

        for id in &evicted {
            warn!(
                "Evicted subscriber {id}: queue full ({} events, {live} live)",
                self.shared.config.subscriber_capacity
            );
        }
        for id in &closed {
            debug!("Dropped subscriber {id}: receiver already gone");
        }

        self.shared
            .metrics
            .event_published(event.event_type(), report.delivered);
        debug!(
            "Published {} event to {} subscribers ({} evicted)",
            event.event_type().unwrap_or("message"),
            report.delivered,
            report.evicted
        );

        report
    }

    /// Build and publish an event in one step
    #[track_caller]
    pub fn publish_event(
        &self,
        event_type: Option<&str>,
        data: impl Into<String>,
    ) -> BusResult<PublishReport> {
        let event = Event::new(event_type, data)?;
        Ok(self.publish(event))
    }

    /// Remove a subscriber. Safe to call any number of times, including
    /// after the bus already evicted it.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        self.shared.unregister(id)
    }

    pub fn is_subscribed(&self, id: SubscriberId) -> bool {
        self.shared.lock().contains_key(&id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared.lock().len()
    }

    pub fn stats(&self) -> BusStats {
        let live = self.subscriber_count();
        self.shared.counters.snapshot(live)
    }

    pub fn config(&self) -> &BusConfig {
        &self.shared.config
    }
}

impl BusShared {
    // The map is valid after any panic inside the critical section.
    fn lock(&self) -> MutexGuard<'_, HashMap<SubscriberId, mpsc::Sender<Arc<Event>>>> {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn unregister(&self, id: SubscriberId) -> bool {
        let (removed, live) = {
            let mut subscribers = self.lock();
            let removed = subscribers.remove(&id).is_some();
            if removed {
                self.metrics.subscriber_removed("closed", subscribers.len());
            }
            (removed, subscribers.len())
        };

        if removed {
            BusCounters::add(&self.counters.closed, 1);
            info!("Subscriber {id} left ({live} live)");
        }

        removed
    }
}

impl Clone for BroadcastBus {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl Default for BroadcastBus {
    fn default() -> Self {
        Self::new(BusConfig::default(), Metrics::default())
    }
}
