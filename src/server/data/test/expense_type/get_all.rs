use super::*;

/// Tests listing expense types ordered by name.
///
/// Expected: Ok with the owner's types in alphabetical order
#[tokio::test]
async fn lists_types_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::ExpenseType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ExpenseTypeRepository::new(db);
    repo.create(CreateExpenseTypeParams {
        owner_id: user.id,
        name: "Utilities".to_string(),
    })
    .await?;
    repo.create(CreateExpenseTypeParams {
        owner_id: user.id,
        name: "Housing".to_string(),
    })
    .await?;

    let types = repo.get_all(user.id).await?;

    assert_eq!(types.len(), 2);
    assert_eq!(types[0].name, "Housing");
    assert_eq!(types[1].name, "Utilities");

    Ok(())
}

/// Tests that listing only returns the owner's types.
///
/// Expected: Ok with other users' types excluded
#[tokio::test]
async fn excludes_other_owners_types() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::ExpenseType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    factory::create_expense_type(db, owner.id).await?;
    factory::create_expense_type(db, other.id).await?;

    let repo = ExpenseTypeRepository::new(db);
    let types = repo.get_all(owner.id).await?;

    assert_eq!(types.len(), 1);

    Ok(())
}

/// Tests listing with no types recorded.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::ExpenseType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ExpenseTypeRepository::new(db);
    let types = repo.get_all(user.id).await?;

    assert!(types.is_empty());

    Ok(())
}
