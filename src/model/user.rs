//! User request and response DTOs with their validation rules.
//!
//! Both request variants share one field table and differ only in which fields are
//! required: `CreateUserDto` requires names and email, `UpdateUserDto` makes every
//! field optional. Unknown fields are rejected during deserialization, and so is an
//! explicit `null`: a field is either a value of its type or absent.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Social profile links attached to a user. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct SocialDto {
    #[serde(
        default,
        deserialize_with = "non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub facebook: Option<String>,
    #[serde(
        default,
        deserialize_with = "non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub twitter: Option<String>,
    #[serde(
        default,
        deserialize_with = "non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub github: Option<String>,
    #[serde(
        default,
        deserialize_with = "non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub website: Option<String>,
}

/// Payload for `POST /users`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateUserDto {
    #[validate(
        required(message = "is required"),
        length(min = 1, message = "must not be empty")
    )]
    #[serde(default, deserialize_with = "non_null")]
    pub first_name: Option<String>,
    #[validate(
        required(message = "is required"),
        length(min = 1, message = "must not be empty")
    )]
    #[serde(default, deserialize_with = "non_null")]
    pub last_name: Option<String>,
    #[validate(
        required(message = "is required"),
        email(message = "must be a valid email"),
        custom(function = "validate_email_domain")
    )]
    #[serde(default, deserialize_with = "non_null")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub social: Option<SocialDto>,
}

/// Payload for `PUT /users/{user_id}`. Only supplied fields are changed.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateUserDto {
    #[validate(length(min = 1, message = "must not be empty"))]
    #[serde(default, deserialize_with = "non_null")]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    #[serde(default, deserialize_with = "non_null")]
    pub last_name: Option<String>,
    #[validate(
        email(message = "must be a valid email"),
        custom(function = "validate_email_domain")
    )]
    #[serde(default, deserialize_with = "non_null")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub social: Option<SocialDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub social: Option<SocialDto>,
}

/// Response body for a freshly created user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatedUserDto {
    pub id: i32,
}

/// Deserializes a present field, rejecting `null`. Paired with `#[serde(default)]` an
/// absent field still becomes `None`.
fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Requires a dotted domain (`x@y.z`); addresses such as `x@localhost` are rejected.
///
/// Strings without an `@` are left to the `email` rule so the field reports a single error.
fn validate_email_domain(email: &str) -> Result<(), ValidationError> {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return Ok(());
    };

    let dotted = domain
        .split_once('.')
        .is_some_and(|(host, rest)| !host.is_empty() && !rest.is_empty() && !rest.ends_with('.'));

    if dotted {
        Ok(())
    } else {
        Err(ValidationError::new("email_domain").with_message("must be a valid email".into()))
    }
}
