use super::*;

/// Tests enrolling a user with a role.
///
/// Expected: Ok(()) and the stored role string matches
#[tokio::test]
async fn enrolls_user_with_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_seed_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let course = factory::course::create_course(db).await?;

    let repo = CourseRepository::new(db);
    repo.enroll(EnrollParam {
        user_id: user.id,
        course_id: course.id,
        role: EnrollmentRole::Teacher,
    })
    .await?;

    let enrollment = entity::prelude::CourseEnrollment::find_by_id((user.id, course.id))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(enrollment.role, "TEACHER");

    Ok(())
}

/// Tests enrolling the same user in the same course twice.
///
/// Expected: Err(DbErr) on the second enrollment
#[tokio::test]
async fn fails_on_duplicate_enrollment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_seed_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let course = factory::course::create_course(db).await?;

    let repo = CourseRepository::new(db);
    let param = EnrollParam {
        user_id: user.id,
        course_id: course.id,
        role: EnrollmentRole::Student,
    };
    repo.enroll(param.clone()).await?;

    let result = repo.enroll(param).await;

    assert!(result.is_err());

    Ok(())
}
