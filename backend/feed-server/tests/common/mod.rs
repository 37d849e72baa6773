#![allow(dead_code)]

//! Test infrastructure for feed-server API tests

use feed_bus::{BroadcastBus, BusConfig, Metrics, ShutdownCoordinator, StreamConfig, StreamState};
use feed_config::FeedConfig;
use feed_server::AppState;

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;

/// AppState with default bus and feed settings, no keep-alive or retry frames
pub fn create_test_app_state() -> AppState {
    create_test_app_state_with(BusConfig::default(), FeedConfig::default())
}

pub fn create_test_app_state_with(bus_config: BusConfig, feed: FeedConfig) -> AppState {
    let metrics = Metrics::new();
    let stream = StreamState {
        bus: BroadcastBus::new(bus_config, metrics.clone()),
        shutdown: ShutdownCoordinator::new(),
        config: StreamConfig {
            keep_alive: None,
            retry_ms: None,
        },
        metrics,
    };

    AppState::new(stream, feed, None)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Next data chunk of a streaming body; None when the stream has ended
pub async fn next_chunk(body: &mut Body) -> Option<String> {
    let frame = tokio::time::timeout(Duration::from_secs(2), body.frame())
        .await
        .expect("timed out waiting for stream data")?
        .unwrap();
    let data = frame.into_data().unwrap();
    Some(String::from_utf8(data.to_vec()).unwrap())
}
