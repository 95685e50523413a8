use super::*;

/// Tests deleting an expense type.
///
/// Expected: Ok(true), record gone
#[tokio::test]
async fn deletes_own_type() -> Result<(), DbErr> {
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
    let deleted = repo.delete(expense_type.id, user.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(expense_type.id, user.id).await?.is_none());

    Ok(())
}

/// Tests that a user cannot delete another user's type.
///
/// Expected: Ok(false), record still present
#[tokio::test]
async fn cannot_delete_other_owners_type() -> Result<(), DbErr> {
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
    let deleted = repo.delete(expense_type.id, intruder.id).await?;

    assert!(!deleted);
    assert!(repo.get_by_id(expense_type.id, owner.id).await?.is_some());

    Ok(())
}

/// Tests deleting a nonexistent type.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::ExpenseType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ExpenseTypeRepository::new(db);
    let deleted = repo.delete(12345, user.id).await?;

    assert!(!deleted);

    Ok(())
}
