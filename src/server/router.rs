use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{status, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Grading API", description = "User management for the grading service"),
    tags(
        (name = "status", description = "Service health"),
        (name = "user", description = "Create, read, update and delete users")
    )
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// Registers the status route, the four user routes and the generated OpenAPI
/// document at `/api-docs/openapi.json`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(status::status))
        .routes(routes!(user::create_user))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .split_for_parts();

    router.route("/api-docs/openapi.json", get(move || async move { Json(api) }))
}
