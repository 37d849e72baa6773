use metrics::{counter, gauge};

/// Label for events published without a type
pub const UNTYPED_EVENT_LABEL: &str = "message";

/// Label for any event type not in the tracked list
pub const OTHER_EVENT_LABEL: &str = "other";

/// Metrics collector for bus and stream operations.
///
/// Metric names only ever embed labels from a fixed set: event types are
/// reported by name when listed in `event_types`, and as `other` otherwise.
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
    event_types: &'static [&'static str],
}

impl Metrics {
    pub fn new() -> Self {
        Self::with_event_types(&[])
    }

    /// Collector that reports the given event types under their own names
    pub fn with_event_types(event_types: &'static [&'static str]) -> Self {
        Self {
            prefix: "feed_bus",
            event_types,
        }
    }

    /// Bounded metric label for an event type
    pub fn event_label(&self, event_type: Option<&str>) -> &'static str {
        match event_type {
            None => UNTYPED_EVENT_LABEL,
            Some(event_type) => self
                .event_types
                .iter()
                .find(|tracked| **tracked == event_type)
                .copied()
                .unwrap_or(OTHER_EVENT_LABEL),
        }
    }

    /// Record a new subscriber joining the live set
    pub fn subscriber_added(&self, live: usize) {
        counter!(format!("{}.subscribers.added", self.prefix)).increment(1);
        gauge!(format!("{}.subscribers.live", self.prefix)).set(live as f64);
    }

    /// Record a subscriber leaving the live set
    pub fn subscriber_removed(&self, reason: &str, live: usize) {
        counter!(format!("{}.subscribers.removed", self.prefix)).increment(1);
        counter!(format!("{}.subscribers.removed.{}", self.prefix, reason)).increment(1);
        gauge!(format!("{}.subscribers.live", self.prefix)).set(live as f64);
    }

    /// Record an event fanned out by the bus
    pub fn event_published(&self, event_type: Option<&str>, delivered: usize) {
        counter!(format!("{}.events.published", self.prefix)).increment(1);
        counter!(format!(
            "{}.events.published.{}",
            self.prefix,
            self.event_label(event_type)
        ))
        .increment(1);
        counter!(format!("{}.events.delivered", self.prefix)).increment(delivered as u64);
    }

    /// Record a frame written to a stream connection.
    ///
    /// `kind` is `retry`, `keep_alive`, or an [`Metrics::event_label`].
    pub fn frame_sent(&self, kind: &'static str) {
        counter!(format!("{}.frames.sent.{}", self.prefix, kind)).increment(1);
    }

    /// Record a stream connection opening
    pub fn stream_opened(&self) {
        counter!(format!("{}.streams.opened", self.prefix)).increment(1);
        gauge!(format!("{}.streams.active", self.prefix)).increment(1.0);
    }

    /// Record a stream connection ending
    pub fn stream_closed(&self, reason: &str) {
        counter!(format!("{}.streams.closed", self.prefix)).increment(1);
        counter!(format!("{}.streams.closed.{}", self.prefix, reason)).increment(1);
        gauge!(format!("{}.streams.active", self.prefix)).decrement(1.0);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
