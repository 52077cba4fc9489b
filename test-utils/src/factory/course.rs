//! Course factory for creating test course entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courses with customizable fields.
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    course_details: Option<String>,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory named `"Course {id}"` with no details.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Course {}", next_id()),
            course_details: None,
        }
    }

    /// Sets the course name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the course details.
    pub fn course_details(mut self, details: impl Into<String>) -> Self {
        self.course_details = Some(details.into());
        self
    }

    /// Builds and inserts the course entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::course::Model)` - Created course entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            name: ActiveValue::Set(self.name),
            course_details: ActiveValue::Set(self.course_details),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values.
pub async fn create_course(db: &DatabaseConnection) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db).build().await
}
