use super::*;

/// Tests the hash-free lookup by id.
///
/// Expected: Ok(Some) with the domain model's fields
#[tokio::test]
async fn finds_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.email, created.email);
    assert!(!found.admin);

    Ok(())
}

/// Tests looking up an id with no account.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_user_is_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo.find_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
