use super::*;

/// Tests listing catalog entries grouped by type name.
///
/// Expected: Ok with entries ordered by type name, then entry name
#[tokio::test]
async fn lists_entries_ordered_by_type_then_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_expense_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let housing = test_utils::factory::expense_type::ExpenseTypeFactory::new(db, user.id)
        .name("Housing")
        .build()
        .await?;
    let utilities = test_utils::factory::expense_type::ExpenseTypeFactory::new(db, user.id)
        .name("Utilities")
        .build()
        .await?;

    let repo = ExpenseRepository::new(db);
    repo.create(CreateExpenseParams {
        owner_id: user.id,
        expense_type_id: utilities.id,
        name: "Water".to_string(),
    })
    .await?;
    repo.create(CreateExpenseParams {
        owner_id: user.id,
        expense_type_id: housing.id,
        name: "Rent".to_string(),
    })
    .await?;
    repo.create(CreateExpenseParams {
        owner_id: user.id,
        expense_type_id: utilities.id,
        name: "Electricity".to_string(),
    })
    .await?;

    let entries = repo.get_all(user.id).await?;

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].name, "Rent");
    assert_eq!(entries[1].name, "Electricity");
    assert_eq!(entries[2].name, "Water");
    assert_eq!(entries[0].expense_type_name, "Housing");
    assert_eq!(entries[1].expense_type_name, "Utilities");

    Ok(())
}

/// Tests that listing only returns the owner's entries.
///
/// Expected: Ok with other users' entries excluded
#[tokio::test]
async fn excludes_other_owners_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_expense_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    test_utils::factory::helpers::create_expense_for_user(db, &owner).await?;
    test_utils::factory::helpers::create_expense_for_user(db, &other).await?;

    let repo = ExpenseRepository::new(db);
    let entries = repo.get_all(owner.id).await?;

    assert_eq!(entries.len(), 1);

    Ok(())
}
