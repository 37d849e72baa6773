pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod image;
pub mod image_store;
pub mod index;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    events::{
        events::publish_event, publish_event_request::PublishEventRequest,
        publish_event_response::PublishEventResponse,
    },
    images::{
        image_dto::ImageDto,
        image_list_response::ImageListResponse,
        images::{NEW_IMAGE_EVENT, list_images, send_image},
        send_image_request::SendImageRequest,
        send_image_response::SendImageResponse,
        validation::{validate_image_url, validate_message},
    },
};
pub use app_state::AppState;
pub use image::Image;
pub use image_store::ImageStore;

pub use crate::routes::build_router;
