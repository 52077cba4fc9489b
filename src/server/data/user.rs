//! User data repository for database operations.
//!
//! Provides the `UserRepository`, the data access interface for user records. Social
//! links are encoded on every write and decoded on every read here, at the
//! infrastructure boundary.

use crate::server::{
    error::AppError,
    model::user::{CreateUserParam, Social, UpdateUserParam, User},
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user and returns only its store-assigned ID.
    ///
    /// # Arguments
    /// - `param` - Names, email and optional social links
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the created user
    /// - `Err(AppError::DbErr)` - Insert failed, e.g. duplicate email
    /// - `Err(AppError::InternalErr)` - Social links could not be encoded
    pub async fn create(&self, param: CreateUserParam) -> Result<i32, AppError> {
        let social = param.social.as_ref().map(Social::to_column).transpose()?;

        let result = entity::prelude::User::insert(entity::user::ActiveModel {
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            email: ActiveValue::Set(param.email),
            social: ActiveValue::Set(social),
            ..Default::default()
        })
        .exec(self.db)
        .await?;

        Ok(result.last_insert_id)
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found, social links decoded
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - Stored social column is not valid JSON
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity).transpose()?)
    }

    /// Deletes a user by ID.
    ///
    /// Enrollments and test results referencing the user are removed by the
    /// foreign key cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Applies a partial update, changing only the supplied fields.
    ///
    /// An empty update performs no write and returns the current record.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The user after the update
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error, e.g. the new email is taken
    /// - `Err(AppError::InternalErr)` - Social links could not be encoded or decoded
    pub async fn update(
        &self,
        user_id: i32,
        param: UpdateUserParam,
    ) -> Result<Option<User>, AppError> {
        if param.is_empty() {
            return self.find_by_id(user_id).await;
        }

        let social = param.social.as_ref().map(Social::to_column).transpose()?;

        let mut model = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(user_id),
            ..Default::default()
        };

        if let Some(first_name) = param.first_name {
            model.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = param.last_name {
            model.last_name = ActiveValue::Set(last_name);
        }
        if let Some(email) = param.email {
            model.email = ActiveValue::Set(email);
        }
        if let Some(social) = social {
            model.social = ActiveValue::Set(Some(social));
        }

        match model.update(self.db).await {
            Ok(entity) => Ok(Some(User::from_entity(entity)?)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Deletes every user. Used by the seed program before inserting fresh data.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of users deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_many().exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
