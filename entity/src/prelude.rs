pub use super::course::Entity as Course;
pub use super::course_enrollment::Entity as CourseEnrollment;
pub use super::test::Entity as Test;
pub use super::test_result::Entity as TestResult;
pub use super::user::Entity as User;
