use axum::Json;

use crate::model::status::StatusDto;

/// Tag for grouping status endpoints in OpenAPI documentation
pub static STATUS_TAG: &str = "status";

/// Report that the service is up.
///
/// # Returns
/// - `200 OK` - Always, with `{"up": true}`
#[utoipa::path(
    get,
    path = "/",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Service is running", body = StatusDto)
    ),
)]
pub async fn status() -> Json<StatusDto> {
    Json(StatusDto { up: true })
}
