use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// A single failed constraint on a request field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

/// Response body for a request payload that failed validation.
///
/// Lists every failing field, not just the first one encountered.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    pub error: String,
    pub fields: Vec<FieldErrorDto>,
}
