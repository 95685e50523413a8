use super::*;

/// Tests deleting a catalog entry.
///
/// Expected: Ok(true), entry gone
#[tokio::test]
async fn deletes_own_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_expense_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, expense) = test_utils::factory::helpers::create_expense_for_user(db, &user).await?;

    let repo = ExpenseRepository::new(db);
    let deleted = repo.delete(expense.id, user.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(expense.id, user.id).await?.is_none());

    Ok(())
}

/// Tests that a user cannot delete another user's entry.
///
/// Expected: Ok(false), entry still present
#[tokio::test]
async fn cannot_delete_other_owners_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_expense_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let (_, expense) = test_utils::factory::helpers::create_expense_for_user(db, &owner).await?;

    let repo = ExpenseRepository::new(db);
    let deleted = repo.delete(expense.id, intruder.id).await?;

    assert!(!deleted);
    assert!(repo.get_by_id(expense.id, owner.id).await?.is_some());

    Ok(())
}
