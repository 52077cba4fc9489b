//! Seed service populating a demo course.
//!
//! Wipes every seeded table, then creates one teacher, one course with three tests,
//! two enrolled students and a graded result per student per test, logging result
//! aggregates as it goes. Running it twice leaves the same row counts.

use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{course::CourseRepository, test_result::TestResultRepository, user::UserRepository},
    error::AppError,
    model::{
        course::{CreateCourseParam, CreateTestParam, EnrollParam, EnrollmentRole},
        seed::SeedSummary,
        test_result::{CreateTestResultParam, ResultAggregate},
        user::{CreateUserParam, Social},
    },
};

const COURSE_NAME: &str = "CRUD with Prisma";

/// Test names and how many days from now each is scheduled.
const TESTS: [(&str, i64); 3] = [("First test", 7), ("Second test", 14), ("Final exam", 28)];

/// A seeded student and their result for each test, in test order.
struct SeedStudent {
    first_name: &'static str,
    last_name: &'static str,
    email: &'static str,
    results: [i32; 3],
}

const STUDENTS: [SeedStudent; 2] = [
    SeedStudent {
        first_name: "Shakuntala",
        last_name: "Devi",
        email: "devi@prisma.io",
        results: [800, 950, 910],
    },
    SeedStudent {
        first_name: "David",
        last_name: "Deutsch",
        email: "david@prisma.io",
        results: [650, 900, 950],
    },
];

/// Service that resets and seeds the demo data set.
pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    /// Creates a new SeedService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Clears existing data and inserts the demo data set.
    ///
    /// # Returns
    /// - `Ok(SeedSummary)` - IDs of the created rows and the computed aggregates
    /// - `Err(AppError)` - Any database error; rows written before it are kept
    pub async fn run(&self) -> Result<SeedSummary, AppError> {
        self.clear().await?;

        let user_repo = UserRepository::new(self.db);
        let course_repo = CourseRepository::new(self.db);
        let result_repo = TestResultRepository::new(self.db);

        let teacher_id = user_repo
            .create(CreateUserParam {
                first_name: "Grace".to_string(),
                last_name: "Bell".to_string(),
                email: "grace@hey.com".to_string(),
                social: Some(Social {
                    facebook: Some("gracebell".to_string()),
                    twitter: Some("therealgracebell".to_string()),
                    ..Default::default()
                }),
            })
            .await?;

        let now = Utc::now();
        let course = course_repo
            .create(CreateCourseParam {
                name: COURSE_NAME.to_string(),
                course_details: None,
                tests: TESTS
                    .iter()
                    .map(|(name, days)| CreateTestParam {
                        name: name.to_string(),
                        date: now + Duration::days(*days),
                    })
                    .collect(),
            })
            .await?;

        course_repo
            .enroll(EnrollParam {
                user_id: teacher_id,
                course_id: course.id,
                role: EnrollmentRole::Teacher,
            })
            .await?;

        let mut student_ids = Vec::with_capacity(STUDENTS.len());
        for student in &STUDENTS {
            let student_id = user_repo
                .create(CreateUserParam {
                    first_name: student.first_name.to_string(),
                    last_name: student.last_name.to_string(),
                    email: student.email.to_string(),
                    social: None,
                })
                .await?;

            course_repo
                .enroll(EnrollParam {
                    user_id: student_id,
                    course_id: course.id,
                    role: EnrollmentRole::Student,
                })
                .await?;

            student_ids.push(student_id);
        }

        let mut test_aggregates = Vec::with_capacity(course.tests.len());
        for (index, test) in course.tests.iter().enumerate() {
            for (student, student_id) in STUDENTS.iter().zip(&student_ids) {
                result_repo
                    .create(CreateTestResultParam {
                        test_id: test.id,
                        student_id: *student_id,
                        grader_id: teacher_id,
                        result: student.results[index],
                    })
                    .await?;
            }

            let aggregate =
                ResultAggregate::from_results(&result_repo.results_for_test(test.id).await?);
            tracing::info!("test: {} (id: {}) {:?}", test.name, test.id, aggregate);

            test_aggregates.push((test.name.clone(), aggregate));
        }

        let mut student_aggregates = Vec::with_capacity(STUDENTS.len());
        for (student, student_id) in STUDENTS.iter().zip(&student_ids) {
            let aggregate =
                ResultAggregate::from_results(&result_repo.results_for_student(*student_id).await?);
            tracing::info!(
                "{}'s results (email: {}) {:?}",
                student.first_name,
                student.email,
                aggregate
            );

            student_aggregates.push((student.email.to_string(), aggregate));
        }

        Ok(SeedSummary {
            teacher_id,
            student_ids,
            course_id: course.id,
            test_aggregates,
            student_aggregates,
        })
    }

    /// Deletes all seeded rows, children before parents.
    async fn clear(&self) -> Result<(), DbErr> {
        let course_repo = CourseRepository::new(self.db);

        TestResultRepository::new(self.db).delete_all().await?;
        course_repo.delete_all_enrollments().await?;
        course_repo.delete_all_tests().await?;
        UserRepository::new(self.db).delete_all().await?;
        course_repo.delete_all().await?;

        tracing::debug!("Cleared existing seed data");

        Ok(())
    }
}
