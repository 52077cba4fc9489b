use super::*;

/// Tests creating a course together with its tests.
///
/// Verifies that the tests are linked to the course and returned in order.
///
/// Expected: Ok(Course) with three tests referencing the course
#[tokio::test]
async fn creates_course_with_tests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_seed_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let repo = CourseRepository::new(db);
    let course = repo
        .create(CreateCourseParam {
            name: "CRUD with Prisma".to_string(),
            course_details: None,
            tests: vec![
                CreateTestParam {
                    name: "First test".to_string(),
                    date: now + Duration::days(7),
                },
                CreateTestParam {
                    name: "Second test".to_string(),
                    date: now + Duration::days(14),
                },
                CreateTestParam {
                    name: "Final exam".to_string(),
                    date: now + Duration::days(28),
                },
            ],
        })
        .await?;

    assert!(course.id > 0);
    assert_eq!(course.name, "CRUD with Prisma");

    let names: Vec<&str> = course.tests.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["First test", "Second test", "Final exam"]);
    assert!(course.tests.iter().all(|t| t.course_id == course.id));

    let stored_tests = entity::prelude::Test::find().count(db).await?;
    assert_eq!(stored_tests, 3);

    Ok(())
}

/// Tests creating a course without tests.
///
/// Expected: Ok(Course) with an empty test list
#[tokio::test]
async fn creates_course_without_tests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_seed_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);
    let course = repo
        .create(CreateCourseParam {
            name: "Empty course".to_string(),
            course_details: Some("Nothing scheduled".to_string()),
            tests: Vec::new(),
        })
        .await?;

    assert!(course.tests.is_empty());
    assert_eq!(course.course_details.as_deref(), Some("Nothing scheduled"));

    Ok(())
}
