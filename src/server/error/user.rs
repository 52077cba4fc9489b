use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum UserError {
    /// No user exists with the requested ID.
    ///
    /// Results in a 404 Not Found response.
    #[error("User {0} not found")]
    NotFound(i32),

    /// The store rejected a new user, e.g. a duplicate email or lost connection.
    ///
    /// Results in a 500 Internal Server Error. The database error is logged but
    /// never returned to the client.
    #[error("Failed to create user: {0}")]
    CreateFailed(#[source] sea_orm::DbErr),
}

/// Converts user errors into HTTP responses.
///
/// - `NotFound` → 404 Not Found with "User not found"
/// - `CreateFailed` → 500 Internal Server Error with "Error creating user"
impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(user_id) => {
                tracing::debug!("User {} not found", user_id);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "User not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::CreateFailed(err) => {
                tracing::error!("Error creating user: {}", err);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Error creating user".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
