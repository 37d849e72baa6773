use crate::ApiError;

use feed_bus::Event;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_validation_error_when_rendered_then_400_with_field() {
    // Given
    let error = ApiError::validation("url", "url must include a host");

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["message"], "url must include a host");
    assert_eq!(json["error"]["field"], "url");
}

#[tokio::test]
async fn given_bad_request_when_rendered_then_400_without_field() {
    // Given
    let error = ApiError::BadRequest {
        message: "Expected JSON".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn given_internal_error_when_rendered_then_500() {
    // Given
    let error = ApiError::Internal {
        message: "boom".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "boom");
}

#[tokio::test]
async fn given_invalid_event_type_when_converted_then_validation_on_event_type() {
    // Given
    let bus_error = Event::new(Some("bad\ntype"), "x").unwrap_err();

    // When
    let (status, json) = body_json(ApiError::from(bus_error)).await;

    // Then
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "event_type");
}
