use super::*;

/// Tests detecting a taken email.
///
/// Expected: Ok(true) for a registered email
#[tokio::test]
async fn returns_true_for_registered_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.email_exists(&user.email).await?);

    Ok(())
}

/// Tests detecting an available email.
///
/// Expected: Ok(false) when no account uses the email
#[tokio::test]
async fn returns_false_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(!repo.email_exists("nobody@example.com").await?);

    Ok(())
}
