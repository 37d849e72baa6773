use crate::{ImageStore, NEW_IMAGE_EVENT};

use feed_bus::{BroadcastBus, BusConfig, Metrics, ShutdownCoordinator, StreamConfig, StreamState};
use feed_config::{Config, FeedConfig};

use axum::extract::FromRef;
use metrics_exporter_prometheus::PrometheusHandle;

/// Event types reported by name in metrics; everything else is `other`
const TRACKED_EVENT_TYPES: &[&str] = &[NEW_IMAGE_EVENT];

/// Shared state for every route
#[derive(Clone)]
pub struct AppState {
    pub stream: StreamState,
    pub images: ImageStore,
    pub feed: FeedConfig,
    /// Present when the Prometheus recorder is installed
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(stream: StreamState, feed: FeedConfig, prometheus: Option<PrometheusHandle>) -> Self {
        let images = ImageStore::new(feed.max_images);
        Self {
            stream,
            images,
            feed,
            prometheus,
        }
    }

    /// Wire the bus and stream settings from loaded configuration
    pub fn from_config(
        config: &Config,
        shutdown: ShutdownCoordinator,
        prometheus: Option<PrometheusHandle>,
    ) -> Self {
        let metrics = Metrics::with_event_types(TRACKED_EVENT_TYPES);
        let bus = BroadcastBus::new(
            BusConfig {
                subscriber_capacity: config.bus.subscriber_capacity,
            },
            metrics.clone(),
        );

        let stream = StreamState {
            bus,
            shutdown,
            config: StreamConfig {
                keep_alive: config.stream.keep_alive(),
                retry_ms: config.stream.retry_ms(),
            },
            metrics,
        };

        Self::new(stream, config.feed.clone(), prometheus)
    }

    pub fn bus(&self) -> &BroadcastBus {
        &self.stream.bus
    }

    pub fn shutdown(&self) -> &ShutdownCoordinator {
        &self.stream.shutdown
    }
}

impl FromRef<AppState> for StreamState {
    fn from_ref(state: &AppState) -> Self {
        state.stream.clone()
    }
}
