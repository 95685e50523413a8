use super::*;

/// Tests creating an expense type.
///
/// Expected: Ok with type created for the owner
#[tokio::test]
async fn creates_expense_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::ExpenseType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ExpenseTypeRepository::new(db);
    let created = repo
        .create(CreateExpenseTypeParams {
            owner_id: user.id,
            name: "Housing".to_string(),
        })
        .await?;

    assert!(created.id > 0);
    assert_eq!(created.name, "Housing");

    Ok(())
}

/// Tests that creating a type for a nonexistent owner fails.
///
/// Expected: Err with foreign key constraint error
#[tokio::test]
async fn fails_for_nonexistent_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::ExpenseType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ExpenseTypeRepository::new(db);
    let result = repo
        .create(CreateExpenseTypeParams {
            owner_id: 999,
            name: "Orphan".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
