use super::*;

/// Tests replacing a user's password hash.
///
/// Expected: Ok with the new hash stored
#[tokio::test]
async fn replaces_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.update_password(user.id, "$argon2id$new-hash".to_string())
        .await?;

    let stored = repo.find_entity_by_id(user.id).await?.unwrap();
    assert_eq!(stored.password_hash, "$argon2id$new-hash");

    Ok(())
}

/// Tests that updating an unknown user is a no-op.
///
/// Expected: Ok, other accounts untouched
#[tokio::test]
async fn ignores_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.update_password(user.id + 1000, "unused".to_string())
        .await?;

    let stored = repo.find_entity_by_id(user.id).await?.unwrap();
    assert_eq!(stored.password_hash, user.password_hash);

    Ok(())
}
