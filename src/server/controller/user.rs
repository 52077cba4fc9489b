use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        user::{CreateUserDto, CreatedUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        extractor::{UserIdPath, ValidatedJson},
        model::user::{CreateUserParam, UpdateUserParam},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Create a new user.
///
/// The payload must carry `firstName`, `lastName` and `email`; `social` is optional.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Validated user creation data
///
/// # Returns
/// - `201 Created` - The ID of the new user
/// - `400 Bad Request` - Missing, empty, unknown or malformed fields
/// - `500 Internal Server Error` - The user could not be stored, e.g. duplicate email
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = CreatedUserDto),
        (status = 400, description = "Invalid user data", body = ValidationErrorDto),
        (status = 500, description = "Error creating user", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateUserParam::from_dto(payload)?;

    let user_id = UserService::new(&state.db).create(param).await?;

    tracing::info!("Created user {}", user_id);

    Ok((StatusCode::CREATED, Json(CreatedUserDto { id: user_id })))
}

/// Get a user by ID.
///
/// # Returns
/// - `200 OK` - The user with decoded social links
/// - `400 Bad Request` - `user_id` is not an integer
/// - `404 Not Found` - No user with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 400, description = "Invalid user ID", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user by ID.
///
/// # Returns
/// - `204 No Content` - User deleted
/// - `400 Bad Request` - `user_id` is not an integer
/// - `404 Not Found` - No user with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted user"),
        (status = 400, description = "Invalid user ID", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db).delete(user_id).await?;

    tracing::info!("Deleted user {}", user_id);

    Ok(StatusCode::NO_CONTENT)
}

/// Update a user by ID.
///
/// Only the supplied fields change. An empty payload returns the stored user as is.
///
/// # Returns
/// - `200 OK` - The user after the update
/// - `400 Bad Request` - Invalid user ID or invalid fields
/// - `404 Not Found` - No user with that ID
/// - `500 Internal Server Error` - Database error, e.g. the new email is taken
#[utoipa::path(
    put,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ValidationErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
    ValidatedJson(payload): ValidatedJson<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateUserParam::from_dto(payload);

    let user = UserService::new(&state.db).update(user_id, param).await?;

    tracing::info!("Updated user {}", user_id);

    Ok((StatusCode::OK, Json(user.into_dto())))
}
