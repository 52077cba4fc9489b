use super::*;

/// Tests recording a graded result.
///
/// Expected: Ok(id) with id > 0
#[tokio::test]
async fn records_result() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_seed_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let grader = factory::user::create_user(db).await?;
    let student = factory::user::create_user(db).await?;
    let (test_id, _) = two_tests(db).await?;

    let repo = TestResultRepository::new(db);
    let id = repo
        .create(CreateTestResultParam {
            test_id,
            student_id: student.id,
            grader_id: grader.id,
            result: 800,
        })
        .await?;

    assert!(id > 0);
    assert_eq!(repo.results_for_test(test_id).await?, vec![800]);

    Ok(())
}

/// Tests recording a result for a test that does not exist.
///
/// Expected: Err(DbErr) from the foreign key
#[tokio::test]
async fn fails_for_unknown_test() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_seed_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = TestResultRepository::new(db);
    let result = repo
        .create(CreateTestResultParam {
            test_id: 999999,
            student_id: user.id,
            grader_id: user.id,
            result: 500,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
