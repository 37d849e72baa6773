//! Image feed REST API handlers

use crate::{
    ApiResult, AppState, Image, ImageDto, ImageListResponse, SendImageRequest, SendImageResponse,
    validate_image_url, validate_message,
};

use feed_bus::Event;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use log::info;
use metrics::counter;

/// Event type browsers listen for on the stream
pub const NEW_IMAGE_EVENT: &str = "new_msg";

/// GET /api/v1/images
///
/// List stored images, oldest first
pub async fn list_images(State(state): State<AppState>) -> Json<ImageListResponse> {
    let images = state.images.list().await;

    Json(ImageListResponse {
        success: true,
        data: images.into_iter().map(ImageDto::from).collect(),
    })
}

/// POST /api/v1/send_image
///
/// Store an image and announce it to every connected stream
pub async fn send_image(
    State(state): State<AppState>,
    payload: Result<Json<SendImageRequest>, JsonRejection>,
) -> ApiResult<Json<SendImageResponse>> {
    let Json(request) = payload?;

    let url = validate_image_url(&request.url)?;
    let message = validate_message(request.message, state.feed.max_message_length)?;

    let image = Image::now(url, message);
    let dto = ImageDto::from(image.clone());
    state.images.push(image).await;

    let event = Event::json(NEW_IMAGE_EVENT, &dto)?;
    let report = state.bus().publish(event);

    counter!("feed_server.images.received").increment(1);
    info!(
        "Image received: {} (delivered={}, evicted={})",
        dto.url, report.delivered, report.evicted
    );

    Ok(Json(SendImageResponse {
        received: true,
        url: dto.url,
    }))
}
