use super::*;

/// Tests the admin account listing.
///
/// Expected: Ok with every account, ordered by email
#[tokio::test]
async fn lists_accounts_ordered_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_email(db, "zoe@example.com").await?;
    factory::create_user_with_email(db, "ana@example.com").await?;

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].email, "ana@example.com");
    assert_eq!(users[1].email, "zoe@example.com");

    Ok(())
}
