//! SeaORM entity definitions for the grading database.

pub mod prelude;

pub mod course;
pub mod course_enrollment;
pub mod test_result;
pub mod user;
