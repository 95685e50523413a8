use super::*;

/// Tests moving an entry to a different type and renaming it.
///
/// Expected: Ok(Some) with both fields updated and the new type name resolved
#[tokio::test]
async fn updates_name_and_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_expense_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, expense) = test_utils::factory::helpers::create_expense_for_user(db, &user).await?;
    let new_type = test_utils::factory::expense_type::ExpenseTypeFactory::new(db, user.id)
        .name("Subscriptions")
        .build()
        .await?;

    let repo = ExpenseRepository::new(db);
    let updated = repo
        .update(UpdateExpenseParams {
            id: expense.id,
            owner_id: user.id,
            expense_type_id: new_type.id,
            name: "Streaming".to_string(),
        })
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.name, "Streaming");
    assert_eq!(updated.expense_type_id, new_type.id);
    assert_eq!(updated.expense_type_name, "Subscriptions");

    Ok(())
}

/// Tests that a user cannot update another user's entry.
///
/// Expected: Ok(None)
#[tokio::test]
async fn cannot_update_other_owners_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_expense_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let (expense_type, expense) =
        test_utils::factory::helpers::create_expense_for_user(db, &owner).await?;

    let repo = ExpenseRepository::new(db);
    let updated = repo
        .update(UpdateExpenseParams {
            id: expense.id,
            owner_id: intruder.id,
            expense_type_id: expense_type.id,
            name: "Hijacked".to_string(),
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
