use super::*;
use sea_orm::EntityTrait;

/// Tests creating a user without social links.
///
/// Verifies that the repository returns a positive store-assigned ID and that the
/// stored row matches the input with a NULL social column.
///
/// Expected: Ok(id) with id > 0
#[tokio::test]
async fn creates_user_and_returns_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let id = repo.create(grace()).await?;

    assert!(id > 0);

    let user = repo.find_by_id(id).await?.unwrap();
    assert_eq!(user.first_name, "Grace");
    assert_eq!(user.last_name, "Bell");
    assert_eq!(user.email, "grace@hey.com");
    assert!(user.social.is_none());

    Ok(())
}

/// Tests that social links are stored as JSON text.
///
/// Verifies that the raw column holds the encoded object with only the set keys.
///
/// Expected: social column `{"facebook":"gracebell","twitter":"therealgracebell"}`
#[tokio::test]
async fn stores_social_as_json_text() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let id = repo
        .create(CreateUserParam {
            social: Some(Social {
                facebook: Some("gracebell".to_string()),
                twitter: Some("therealgracebell".to_string()),
                ..Default::default()
            }),
            ..grace()
        })
        .await?;

    let stored = entity::prelude::User::find_by_id(id)
        .one(db)
        .await?
        .unwrap();

    assert_eq!(
        stored.social.as_deref(),
        Some(r#"{"facebook":"gracebell","twitter":"therealgracebell"}"#)
    );

    Ok(())
}

/// Tests creating a user whose email is already taken.
///
/// Verifies that the unique constraint surfaces as a database error.
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
        .email("grace@hey.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.create(grace()).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
