use super::*;

/// Tests clearing enrollments, tests and courses in dependency order.
///
/// Expected: All three tables empty afterwards
#[tokio::test]
async fn deletes_courses_tests_and_enrollments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_seed_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = CourseRepository::new(db);
    let course = repo
        .create(CreateCourseParam {
            name: "Course".to_string(),
            course_details: None,
            tests: vec![CreateTestParam {
                name: "Quiz".to_string(),
                date: Utc::now(),
            }],
        })
        .await?;
    repo.enroll(EnrollParam {
        user_id: user.id,
        course_id: course.id,
        role: EnrollmentRole::Student,
    })
    .await?;

    assert_eq!(repo.delete_all_enrollments().await?, 1);
    assert_eq!(repo.delete_all_tests().await?, 1);
    assert_eq!(repo.delete_all().await?, 1);

    assert_eq!(entity::prelude::Course::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Test::find().count(db).await?, 0);
    assert_eq!(entity::prelude::CourseEnrollment::find().count(db).await?, 0);

    Ok(())
}
