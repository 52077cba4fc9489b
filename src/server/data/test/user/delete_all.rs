use super::*;

/// Tests removing every user.
///
/// Expected: Ok(2), then no users remain
#[tokio::test]
async fn deletes_every_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user(db).await?;
    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete_all().await?;

    assert_eq!(deleted, 2);
    assert!(repo.find_by_id(first.id).await?.is_none());

    Ok(())
}
