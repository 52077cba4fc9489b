use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::model::api::{ErrorDto, FieldErrorDto, ValidationErrorDto};

/// Rejections raised before a handler runs.
///
/// Extractors log every rejection when it happens; converting to a response does not
/// log again.
#[derive(Error, Debug)]
pub enum RequestError {
    /// The payload deserialized but violates one or more field constraints.
    ///
    /// Results in a 400 Bad Request listing every failing field.
    #[error("Request payload failed validation: {0}")]
    InvalidPayload(#[from] ValidationErrors),

    /// The payload is not JSON of the expected shape (syntax error, wrong type,
    /// unknown field, missing content type).
    ///
    /// Results in a 400 Bad Request carrying the extractor's reason.
    #[error("Malformed request payload: {0}")]
    MalformedPayload(String),

    /// A path parameter could not be parsed.
    ///
    /// Results in a 400 Bad Request.
    #[error("Invalid path parameter: {0}")]
    InvalidPathParam(String),

    /// A field marked required was absent after validation succeeded.
    ///
    /// Results in a 400 Bad Request.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidPayload(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorDto {
                    error: "Invalid request payload".to_string(),
                    fields: field_errors(&errors),
                }),
            )
                .into_response(),
            Self::MalformedPayload(message) | Self::InvalidPathParam(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
            }
            err @ Self::MissingField(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

/// Flattens validation errors into one entry per failed constraint.
///
/// Field names are reported in their camelCase wire form and sorted so responses are
/// stable regardless of validation order.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldErrorDto> {
    let mut fields: Vec<FieldErrorDto> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, failures)| {
            let field = camel_case(&field);
            failures.iter().map(move |failure| FieldErrorDto {
                field: field.clone(),
                message: failure
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| failure.code.to_string()),
            })
        })
        .collect();

    fields.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    fields
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;

    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }

    out
}
