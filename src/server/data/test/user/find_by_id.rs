use super::*;

/// Tests finding an existing user by ID.
///
/// Expected: Ok(Some(User)) with decoded social links
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .first_name("Grace")
        .social(serde_json::json!({ "github": "gbell", "website": "https://grace.dev" }))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(user.id, created.id);
    assert_eq!(user.first_name, "Grace");
    assert_eq!(
        user.social,
        Some(Social {
            github: Some("gbell".to_string()),
            website: Some("https://grace.dev".to_string()),
            ..Default::default()
        })
    );

    Ok(())
}

/// Tests querying for a non-existent user.
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
    let result = repo.find_by_id(999999).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests reading a row whose social column is not valid JSON.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_malformed_social_column() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .social_raw("not json")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_id(created.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
