use super::*;

/// Tests the month's variable-expense report lines.
///
/// Expected: Ok with one line per outflow, carrying the denormalized
/// expense name, ordered by that name
#[tokio::test]
async fn lists_month_lines_ordered_by_expense_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_expense_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, expense) = test_utils::factory::helpers::create_expense_for_user(db, &user).await?;

    test_utils::factory::outflow::OutflowFactory::new(db, user.id, expense.id)
        .expense_name("Transport")
        .amount(Decimal::new(1_500, 2))
        .build()
        .await?;
    test_utils::factory::outflow::OutflowFactory::new(db, user.id, expense.id)
        .expense_name("Groceries")
        .amount(Decimal::new(3_000, 2))
        .build()
        .await?;

    let repo = ReportRepository::new(db);
    let lines = repo.variable_expenses(user.id, "2026", "08").await?;

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].expense_name, "Groceries");
    assert_eq!(lines[1].expense_name, "Transport");

    Ok(())
}

/// Tests that the report is owner-scoped.
///
/// Expected: Ok with another user's outflows excluded
#[tokio::test]
async fn excludes_other_owners_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_expense_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _, _) =
        test_utils::factory::helpers::create_outflow_with_dependencies(db).await?;
    test_utils::factory::helpers::create_outflow_with_dependencies(db).await?;

    let repo = ReportRepository::new(db);
    let lines = repo.variable_expenses(owner.id, "2026", "08").await?;

    assert_eq!(lines.len(), 1);

    Ok(())
}
