//! Course data repository covering courses, their tests and enrollments.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::course::{Course, CreateCourseParam, EnrollParam, Test};

/// Repository providing database operations for courses.
pub struct CourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseRepository<'a> {
    /// Creates a new CourseRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a course followed by each of its tests.
    ///
    /// # Returns
    /// - `Ok(Course)` - The course with its tests in the order supplied
    /// - `Err(DbErr)` - Database error during any insert
    pub async fn create(&self, param: CreateCourseParam) -> Result<Course, DbErr> {
        let course = entity::course::ActiveModel {
            name: ActiveValue::Set(param.name),
            course_details: ActiveValue::Set(param.course_details),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut tests = Vec::with_capacity(param.tests.len());
        for test in param.tests {
            let entity = entity::test::ActiveModel {
                updated_at: ActiveValue::Set(Utc::now()),
                name: ActiveValue::Set(test.name),
                date: ActiveValue::Set(test.date),
                course_id: ActiveValue::Set(course.id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            tests.push(Test::from_entity(entity));
        }

        Ok(Course {
            id: course.id,
            name: course.name,
            course_details: course.course_details,
            tests,
        })
    }

    /// Enrolls a user in a course with the given role.
    ///
    /// # Returns
    /// - `Ok(())` - Enrollment created
    /// - `Err(DbErr)` - Database error, including an existing enrollment for the pair
    pub async fn enroll(&self, param: EnrollParam) -> Result<(), DbErr> {
        entity::prelude::CourseEnrollment::insert(entity::course_enrollment::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            course_id: ActiveValue::Set(param.course_id),
            created_at: ActiveValue::Set(Utc::now()),
            role: ActiveValue::Set(param.role.as_str().to_string()),
        })
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Deletes every enrollment.
    pub async fn delete_all_enrollments(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::CourseEnrollment::delete_many()
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every test.
    pub async fn delete_all_tests(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Test::delete_many().exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Deletes every course. Tests and enrollments should be removed first.
    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Course::delete_many().exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
