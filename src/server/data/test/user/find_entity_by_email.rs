use super::*;

/// Tests finding a user by email.
///
/// Verifies that the lookup returns the full entity, including the stored
/// password hash needed by the login flow.
///
/// Expected: Ok(Some) with matching account
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user_with_email(db, "login@example.com").await?;

    let repo = UserRepository::new(db);
    let found = repo.find_entity_by_email("login@example.com").await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, user.id);
    assert_eq!(found.password_hash, user.password_hash);

    Ok(())
}

/// Tests lookup with an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_entity_by_email("missing@example.com").await?;

    assert!(found.is_none());

    Ok(())
}
