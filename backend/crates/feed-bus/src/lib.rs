pub mod broadcast_bus;
pub mod bus_config;
pub mod bus_stats;
pub mod error;
pub mod event;
pub mod frame;
pub mod metrics;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod stream_adapter;
pub mod stream_config;
pub mod stream_handler;
pub mod subscriber;
pub mod subscriber_id;

pub use broadcast_bus::{BroadcastBus, PublishReport};
pub use bus_config::{BusConfig, DEFAULT_SUBSCRIBER_CAPACITY};
pub use bus_stats::BusStats;
pub use error::{BusError, Result};
pub use event::Event;
pub use metrics::Metrics;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use stream_adapter::{CloseReason, StreamAdapter};
pub use stream_config::StreamConfig;
pub use stream_handler::{StreamState, handler};
pub use subscriber::Subscriber;
pub use subscriber_id::SubscriberId;

#[cfg(test)]
mod tests;

use tracing::info_span;

/// Create a tracing span for one event stream connection.
/// All log entries emitted inside it carry the subscriber id.
pub fn create_stream_span(subscriber_id: &str) -> tracing::Span {
    info_span!("event_stream", subscriber_id = %subscriber_id)
}
