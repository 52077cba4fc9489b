//! Course, test and enrollment domain models used by the seed program.

use chrono::{DateTime, Utc};

/// Role a user holds within a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentRole {
    Teacher,
    Student,
}

impl EnrollmentRole {
    /// Value stored in the `role` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Teacher => "TEACHER",
            Self::Student => "STUDENT",
        }
    }
}

/// A scheduled test belonging to a course.
#[derive(Debug, Clone, PartialEq)]
pub struct Test {
    pub id: i32,
    pub course_id: i32,
    pub name: String,
    pub date: DateTime<Utc>,
}

impl Test {
    pub fn from_entity(entity: entity::test::Model) -> Self {
        Self {
            id: entity.id,
            course_id: entity.course_id,
            name: entity.name,
            date: entity.date,
        }
    }
}

/// A course together with its tests, ordered as they were created.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub course_details: Option<String>,
    pub tests: Vec<Test>,
}

/// Parameters for one test created alongside its course.
#[derive(Debug, Clone)]
pub struct CreateTestParam {
    pub name: String,
    pub date: DateTime<Utc>,
}

/// Parameters for creating a course with its tests.
#[derive(Debug, Clone)]
pub struct CreateCourseParam {
    pub name: String,
    pub course_details: Option<String>,
    pub tests: Vec<CreateTestParam>,
}

/// Parameters for enrolling a user in a course.
#[derive(Debug, Clone)]
pub struct EnrollParam {
    pub user_id: i32,
    pub course_id: i32,
    pub role: EnrollmentRole,
}
