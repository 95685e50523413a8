use super::*;

/// Tests deleting all of a user's tokens.
///
/// Expected: Ok with the user's tokens gone and other users' tokens intact
#[tokio::test]
async fn deletes_only_that_users_tokens() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::PasswordResetToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let now = Utc::now();

    let repo = PasswordResetTokenRepository::new(db);
    repo.create(user.id, "tok-one".to_string(), now + Duration::hours(1))
        .await?;
    repo.create(user.id, "tok-two".to_string(), now + Duration::hours(1))
        .await?;
    repo.create(other.id, "tok-other".to_string(), now + Duration::hours(1))
        .await?;

    repo.delete_for_user(user.id).await?;

    assert!(repo.find_valid(user.id, "tok-one", now).await?.is_none());
    assert!(repo.find_valid(user.id, "tok-two", now).await?.is_none());
    assert!(repo.find_valid(other.id, "tok-other", now).await?.is_some());

    Ok(())
}
