use crate::{AppState, health, index, list_images, publish_event, send_image};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(index::index))
        .route("/static/js/sse.js", get(index::sse_script))
        // Event stream
        .route("/stream/listen", get(feed_bus::handler))
        // REST API
        .route("/api/v1/images", get(list_images))
        .route("/api/v1/send_image", post(send_image))
        .route("/api/v1/events", post(publish_event))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .route("/metrics", get(health::metrics))
        .with_state(state)
        // The bot posts from another origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
