//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the top-level
//! error type that wraps domain-specific errors and implements `IntoResponse` so
//! handlers can return it directly.

pub mod config;
pub mod internal;
pub mod request;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, internal::InternalError, request::RequestError, user::UserError,
    },
};

/// Top-level application error type.
///
/// Domain-specific errors (`RequestError`, `UserError`) handle their own response
/// mapping, every other variant becomes a 500 Internal Server Error whose details are
/// logged server-side only.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Request payload or path parameter failed validation.
    ///
    /// Delegates to `RequestError::into_response()` (400 Bad Request).
    #[error(transparent)]
    RequestErr(#[from] RequestError),

    /// User lookup or mutation error.
    ///
    /// Delegates to `UserError::into_response()` (404 or 500).
    #[error(transparent)]
    UserErr(#[from] UserError),

    /// Unexpected internal state such as undecodable stored data.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or listener failure while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `RequestErr`
/// - 404 Not Found / 500 Internal Server Error - For `UserErr`, see `UserError`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::RequestErr(err) => err.into_response(),
            Self::UserErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
