use super::*;

/// Tests deleting an account.
///
/// Expected: Ok(true), with other accounts untouched
#[tokio::test]
async fn deletes_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(target.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(target.id).await?.is_none());
    assert!(repo.find_by_id(other.id).await?.is_some());

    Ok(())
}

/// Tests deleting an id with no account.
///
/// Expected: Ok(false)
#[tokio::test]
async fn delete_missing_is_false() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let deleted = repo.delete(999).await?;

    assert!(!deleted);

    Ok(())
}
