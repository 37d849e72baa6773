use crate::{ApiResult, AppState, PublishEventRequest, PublishEventResponse};

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use log::debug;

/// POST /api/v1/events
///
/// Publish an arbitrary event to every connected stream
pub async fn publish_event(
    State(state): State<AppState>,
    payload: Result<Json<PublishEventRequest>, JsonRejection>,
) -> ApiResult<Json<PublishEventResponse>> {
    let Json(request) = payload?;

    let report = state
        .bus()
        .publish_event(request.event_type.as_deref(), request.data)?;
    debug!(
        "Published {} event: delivered={}, evicted={}",
        request.event_type.as_deref().unwrap_or("message"),
        report.delivered,
        report.evicted
    );

    Ok(Json(report.into()))
}
