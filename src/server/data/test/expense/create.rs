use super::*;

/// Tests creating a catalog entry.
///
/// Verifies that the created entry comes back with its type name resolved
/// from the joined expense type.
///
/// Expected: Ok with entry created and type name filled in
#[tokio::test]
async fn creates_entry_with_type_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_expense_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let expense_type = factory::create_expense_type(db, user.id).await?;

    let repo = ExpenseRepository::new(db);
    let created = repo
        .create(CreateExpenseParams {
            owner_id: user.id,
            expense_type_id: expense_type.id,
            name: "Rent".to_string(),
        })
        .await?;

    assert!(created.id > 0);
    assert_eq!(created.name, "Rent");
    assert_eq!(created.expense_type_id, expense_type.id);
    assert_eq!(created.expense_type_name, expense_type.name);

    Ok(())
}

/// Tests that creating an entry under a nonexistent type fails.
///
/// Expected: Err with foreign key constraint error
#[tokio::test]
async fn fails_for_nonexistent_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_expense_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ExpenseRepository::new(db);
    let result = repo
        .create(CreateExpenseParams {
            owner_id: user.id,
            expense_type_id: 999,
            name: "Orphan".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
