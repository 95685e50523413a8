use super::*;

/// Tests creating a new user account.
///
/// Verifies that the repository stores the account and returns a domain model
/// with a generated id and the supplied email.
///
/// Expected: Ok with account created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            email: "anna@example.com".to_string(),
            password_hash: "$argon2id$test".to_string(),
            admin: false,
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.email, "anna@example.com");
    assert!(!user.admin);

    // Hash is stored but never exposed on the domain model
    let stored = repo.find_entity_by_id(user.id).await?.unwrap();
    assert_eq!(stored.password_hash, "$argon2id$test");

    Ok(())
}

/// Tests that the unique index rejects a duplicate email.
///
/// Expected: Err on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(CreateUserParams {
        email: "taken@example.com".to_string(),
        password_hash: "hash-one".to_string(),
        admin: false,
    })
    .await?;

    let result = repo
        .create(CreateUserParams {
            email: "taken@example.com".to_string(),
            password_hash: "hash-two".to_string(),
            admin: false,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
