use super::*;
use sea_orm::EntityTrait;

/// Tests updating a single field.
///
/// Verifies that only the supplied last name changes.
///
/// Expected: Ok(Some(User)) with other fields unchanged
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let id = repo.create(grace()).await?;

    let updated = repo
        .update(
            id,
            UpdateUserParam {
                last_name: Some("Bellwether".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.first_name, "Grace");
    assert_eq!(updated.last_name, "Bellwether");
    assert_eq!(updated.email, "grace@hey.com");

    let fetched = repo.find_by_id(id).await?.unwrap();
    assert_eq!(fetched, updated);

    Ok(())
}

/// Tests that social links supplied on update are encoded like on create.
///
/// Expected: Ok(Some(User)) with decoded social and JSON text in the column
#[tokio::test]
async fn encodes_social_on_update() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let id = repo.create(grace()).await?;

    let social = Social {
        twitter: Some("therealgracebell".to_string()),
        ..Default::default()
    };
    let updated = repo
        .update(
            id,
            UpdateUserParam {
                social: Some(social.clone()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.social, Some(social));

    let stored = entity::prelude::User::find_by_id(id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(
        stored.social.as_deref(),
        Some(r#"{"twitter":"therealgracebell"}"#)
    );

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update(
            999999,
            UpdateUserParam {
                first_name: Some("Nobody".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests an update with no fields.
///
/// Expected: Ok(Some(User)) unchanged for an existing user, Ok(None) otherwise
#[tokio::test]
async fn empty_update_returns_current_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let id = repo.create(grace()).await?;

    let unchanged = repo.update(id, UpdateUserParam::default()).await?.unwrap();
    assert_eq!(unchanged.last_name, "Bell");

    let missing = repo.update(999999, UpdateUserParam::default()).await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests changing the email to one another user already has.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn fails_on_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("devi@prisma.io")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let id = repo.create(grace()).await?;

    let result = repo
        .update(
            id,
            UpdateUserParam {
                email: Some("devi@prisma.io".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
