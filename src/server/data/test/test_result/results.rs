use super::*;

/// Tests filtering results by test and by student.
///
/// Expected: Each query returns only matching results in insertion order
#[tokio::test]
async fn filters_results_by_test_and_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_seed_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let grader = factory::user::create_user(db).await?;
    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    let (first, second) = two_tests(db).await?;

    let repo = TestResultRepository::new(db);
    for (test_id, student_id, result) in [
        (first, alice.id, 800),
        (first, bob.id, 650),
        (second, alice.id, 950),
        (second, bob.id, 900),
    ] {
        repo.create(CreateTestResultParam {
            test_id,
            student_id,
            grader_id: grader.id,
            result,
        })
        .await?;
    }

    assert_eq!(repo.results_for_test(first).await?, vec![800, 650]);
    assert_eq!(repo.results_for_student(bob.id).await?, vec![650, 900]);
    assert!(repo.results_for_student(grader.id).await?.is_empty());

    assert_eq!(repo.delete_all().await?, 4);
    assert!(repo.results_for_test(first).await?.is_empty());

    Ok(())
}
