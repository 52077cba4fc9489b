//! User service for business logic.
//!
//! Wraps `UserRepository` and turns absent rows into `UserError::NotFound` so every
//! controller maps the same outcome to the same response.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{user::UserError, AppError},
    model::user::{CreateUserParam, UpdateUserParam, User},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user.
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the new user
    /// - `Err(AppError::UserErr(UserError::CreateFailed))` - The store rejected the insert
    /// - `Err(AppError::InternalErr)` - Social links could not be encoded
    pub async fn create(&self, param: CreateUserParam) -> Result<i32, AppError> {
        let user_repo = UserRepository::new(self.db);

        match user_repo.create(param).await {
            Ok(user_id) => Ok(user_id),
            Err(AppError::DbErr(err)) => Err(UserError::CreateFailed(err).into()),
            Err(err) => Err(err),
        }
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::UserErr(UserError::NotFound))` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get(&self, user_id: i32) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| UserError::NotFound(user_id).into())
    }

    /// Deletes a user by ID.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::UserErr(UserError::NotFound))` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: i32) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        if !user_repo.delete(user_id).await? {
            return Err(UserError::NotFound(user_id).into());
        }

        Ok(())
    }

    /// Applies a partial update to a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The user after the update
    /// - `Err(AppError::UserErr(UserError::NotFound))` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error, e.g. the new email is taken
    pub async fn update(&self, user_id: i32, param: UpdateUserParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .update(user_id, param)
            .await?
            .ok_or_else(|| UserError::NotFound(user_id).into())
    }
}
