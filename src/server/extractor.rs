//! Request extractors that validate input before a handler runs.
//!
//! Every rejection is logged here, on every route, and then surfaced as a
//! `RequestError` which renders as a client error.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::server::error::{request::RequestError, AppError};

/// JSON body that has been deserialized and passed its `Validate` rules.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::warn!("Rejected request payload: {}", rejection.body_text());

                RequestError::MalformedPayload(rejection.body_text())
            })?;

        payload.validate().map_err(|errors| {
            tracing::warn!("Request payload failed validation: {}", errors);

            RequestError::InvalidPayload(errors)
        })?;

        Ok(Self(payload))
    }
}

/// The `{user_id}` path segment parsed as an integer.
pub struct UserIdPath(pub i32);

impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(user_id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::warn!("Rejected user id path parameter: {}", rejection.body_text());

                RequestError::InvalidPathParam(rejection.body_text())
            })?;

        Ok(Self(user_id))
    }
}
