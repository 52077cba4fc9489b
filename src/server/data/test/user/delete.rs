use super::*;

/// Tests deleting an existing user.
///
/// Verifies that the row is gone afterwards.
///
/// Expected: Ok(true), then find_by_id returns None
#[tokio::test]
async fn deletes_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(created.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(created.id).await?.is_none());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let deleted = repo.delete(999999).await?;

    assert!(!deleted);

    Ok(())
}

/// Tests that deleting one user leaves others untouched.
///
/// Expected: Other user still present
#[tokio::test]
async fn leaves_other_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.delete(first.id).await?;

    assert!(repo.find_by_id(second.id).await?.is_some());

    Ok(())
}
