use feed_bus::{
    BroadcastBus, BusConfig, Event, Metrics, ShutdownCoordinator, StreamConfig, StreamState,
};

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    routing::get,
};
use http_body_util::BodyExt;
use tokio::time::timeout;
use tower::ServiceExt;

fn stream_state() -> StreamState {
    StreamState {
        bus: BroadcastBus::new(BusConfig::default(), Metrics::new()),
        shutdown: ShutdownCoordinator::new(),
        config: StreamConfig {
            keep_alive: None,
            retry_ms: None,
        },
        metrics: Metrics::new(),
    }
}

fn router(state: StreamState) -> Router {
    Router::new()
        .route("/stream/listen", get(feed_bus::handler))
        .with_state(state)
}

fn listen_request() -> Request<Body> {
    Request::builder()
        .uri("/stream/listen")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn given_listen_request_when_handled_then_event_stream_headers_and_subscription() {
    // Given
    let state = stream_state();

    // When
    let response = router(state.clone()).oneshot(listen_request()).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/event-stream"
    );
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-cache");
    assert_eq!(state.bus.subscriber_count(), 1);
}

#[tokio::test]
async fn given_open_stream_when_event_published_then_frame_in_body() {
    // Given
    let state = stream_state();
    let response = router(state.clone()).oneshot(listen_request()).await.unwrap();
    let mut body = response.into_body();

    // When
    state
        .bus
        .publish(Event::new(Some("new_msg"), r#"{"url":"x"}"#).unwrap());

    // Then
    let frame = timeout(Duration::from_secs(2), body.frame())
        .await
        .unwrap()
        .unwrap()
        .unwrap();
    let data = frame.into_data().unwrap();
    assert_eq!(&data[..], b"event: new_msg\ndata: {\"url\":\"x\"}\n\n");
}

#[tokio::test]
async fn given_open_stream_when_client_drops_body_then_unsubscribed() {
    // Given
    let state = stream_state();
    let response = router(state.clone()).oneshot(listen_request()).await.unwrap();
    assert_eq!(state.bus.subscriber_count(), 1);

    // When
    drop(response);

    // Then
    assert_eq!(state.bus.subscriber_count(), 0);
    assert_eq!(state.bus.stats().closed, 1);
}

#[tokio::test]
async fn given_shutdown_when_listen_requested_then_unavailable() {
    // Given
    let state = stream_state();
    state.shutdown.shutdown();

    // When
    let response = router(state.clone()).oneshot(listen_request()).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(state.bus.subscriber_count(), 0);
}

#[tokio::test]
async fn given_open_stream_when_shutdown_then_body_ends() {
    // Given
    let state = stream_state();
    let response = router(state.clone()).oneshot(listen_request()).await.unwrap();
    let body = response.into_body();

    // When
    state.shutdown.shutdown();

    // Then
    let collected = timeout(Duration::from_secs(2), body.collect())
        .await
        .unwrap()
        .unwrap();
    assert!(collected.to_bytes().is_empty());
}
