use crate::frame::EVENT_STREAM_CONTENT_TYPE;
use crate::{BroadcastBus, Metrics, ShutdownCoordinator, StreamAdapter, StreamConfig};

use axum::{
    body::Body,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use log::debug;

/// State needed by the event stream endpoint
#[derive(Clone)]
pub struct StreamState {
    pub bus: BroadcastBus,
    pub shutdown: ShutdownCoordinator,
    pub config: StreamConfig,
    pub metrics: Metrics,
}

/// GET /stream/listen - long-lived server-sent events stream
pub async fn handler(State(state): State<StreamState>) -> Response {
    if state.shutdown.is_shutdown() {
        return (StatusCode::SERVICE_UNAVAILABLE, "Shutting down").into_response();
    }

    let subscriber = state.bus.subscribe();
    debug!("Event stream requested, subscriber {}", subscriber.id());

    let adapter = StreamAdapter::new(
        subscriber,
        state.shutdown.subscribe_guard(),
        &state.config,
        state.metrics.clone(),
    );

    (
        [
            (header::CONTENT_TYPE, EVENT_STREAM_CONTENT_TYPE),
            (header::CACHE_CONTROL, "no-cache"),
            (header::HeaderName::from_static("x-accel-buffering"), "no"),
        ],
        Body::from_stream(adapter.into_stream()),
    )
        .into_response()
}
