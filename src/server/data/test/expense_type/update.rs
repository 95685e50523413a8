use super::*;

/// Tests renaming an expense type.
///
/// Expected: Ok(Some) with the new name stored
#[tokio::test]
async fn renames_own_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::ExpenseType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let expense_type = factory::create_expense_type(db, user.id).await?;

    let repo = ExpenseTypeRepository::new(db);
    let updated = repo
        .update(UpdateExpenseTypeParams {
            id: expense_type.id,
            owner_id: user.id,
            name: "Renamed".to_string(),
        })
        .await?;

    assert!(updated.is_some());
    assert_eq!(updated.unwrap().name, "Renamed");

    Ok(())
}

/// Tests that a user cannot update another user's type.
///
/// Expected: Ok(None), record untouched
#[tokio::test]
async fn cannot_update_other_owners_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::ExpenseType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let expense_type = factory::create_expense_type(db, owner.id).await?;

    let repo = ExpenseTypeRepository::new(db);
    let updated = repo
        .update(UpdateExpenseTypeParams {
            id: expense_type.id,
            owner_id: intruder.id,
            name: "Hijacked".to_string(),
        })
        .await?;

    assert!(updated.is_none());

    let unchanged = repo.get_by_id(expense_type.id, owner.id).await?.unwrap();
    assert_eq!(unchanged.name, expense_type.name);

    Ok(())
}
