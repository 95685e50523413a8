use super::*;

/// Tests finding an unexpired token.
///
/// Expected: Ok(Some) for a live token
#[tokio::test]
async fn finds_live_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::PasswordResetToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();

    let repo = PasswordResetTokenRepository::new(db);
    repo.create(user.id, "tok-abc".to_string(), now + Duration::hours(1))
        .await?;

    let found = repo.find_valid(user.id, "tok-abc", now).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().token, "tok-abc");

    Ok(())
}

/// Tests that an expired token no longer validates.
///
/// Expected: Ok(None)
#[tokio::test]
async fn rejects_expired_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::PasswordResetToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();

    let repo = PasswordResetTokenRepository::new(db);
    repo.create(user.id, "tok-old".to_string(), now - Duration::minutes(5))
        .await?;

    let found = repo.find_valid(user.id, "tok-old", now).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that a token only validates for its own user.
///
/// Expected: Ok(None) for another user's token value
#[tokio::test]
async fn rejects_other_users_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::PasswordResetToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let now = Utc::now();

    let repo = PasswordResetTokenRepository::new(db);
    repo.create(owner.id, "tok-xyz".to_string(), now + Duration::hours(1))
        .await?;

    let found = repo.find_valid(other.id, "tok-xyz", now).await?;

    assert!(found.is_none());

    Ok(())
}
