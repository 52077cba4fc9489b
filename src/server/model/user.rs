//! User domain models and parameters.
//!
//! The `social` links are stored as a JSON text column. `Social::to_column` is used on
//! every write that touches it and `User::from_entity` decodes it on every read, so the
//! API never sees the encoded form.

use serde::{Deserialize, Serialize};

use crate::{
    model::user::{CreateUserDto, SocialDto, UpdateUserDto, UserDto},
    server::error::{internal::InternalError, request::RequestError},
};

/// Social profile links as persisted in the `social` column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Social {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl Social {
    pub fn from_dto(dto: SocialDto) -> Self {
        Self {
            facebook: dto.facebook,
            twitter: dto.twitter,
            github: dto.github,
            website: dto.website,
        }
    }

    pub fn into_dto(self) -> SocialDto {
        SocialDto {
            facebook: self.facebook,
            twitter: self.twitter,
            github: self.github,
            website: self.website,
        }
    }

    /// Encodes the links as the JSON text stored in the `social` column.
    ///
    /// # Returns
    /// - `Ok(String)` - JSON object containing only the keys that are set
    /// - `Err(InternalError::SocialEncoding)` - Serialization failed
    pub fn to_column(&self) -> Result<String, InternalError> {
        serde_json::to_string(self).map_err(InternalError::SocialEncoding)
    }

    /// Decodes the `social` column of the user with the given ID.
    ///
    /// # Returns
    /// - `Ok(Social)` - Decoded links
    /// - `Err(InternalError::MalformedSocial)` - The stored text is not a valid links object
    pub fn from_column(user_id: i32, column: &str) -> Result<Self, InternalError> {
        serde_json::from_str(column)
            .map_err(|source| InternalError::MalformedSocial { user_id, source })
    }
}

/// A persisted user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Store-assigned identifier, immutable after creation.
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Decoded social links, `None` when the column is NULL.
    pub social: Option<Social>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            social: self.social.map(Social::into_dto),
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model with `social` decoded
    /// - `Err(InternalError::MalformedSocial)` - The stored social column is not valid JSON
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, InternalError> {
        let social = entity
            .social
            .as_deref()
            .map(|column| Social::from_column(entity.id, column))
            .transpose()?;

        Ok(Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            social,
        })
    }
}

/// Parameters for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub social: Option<Social>,
}

impl CreateUserParam {
    /// Converts a validated create DTO into creation parameters.
    ///
    /// # Returns
    /// - `Ok(CreateUserParam)` - All required fields present
    /// - `Err(RequestError::MissingField)` - A required field was absent, which means the
    ///   DTO skipped validation
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, RequestError> {
        Ok(Self {
            first_name: dto.first_name.ok_or(RequestError::MissingField("firstName"))?,
            last_name: dto.last_name.ok_or(RequestError::MissingField("lastName"))?,
            email: dto.email.ok_or(RequestError::MissingField("email"))?,
            social: dto.social.map(Social::from_dto),
        })
    }
}

/// Parameters for a partial user update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub social: Option<Social>,
}

impl UpdateUserParam {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            social: dto.social.map(Social::from_dto),
        }
    }

    /// Whether the update would change no column.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.social.is_none()
    }
}
